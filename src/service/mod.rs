mod planets;

pub use planets::PlanetService;
