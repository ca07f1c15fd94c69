mod settings;

pub use settings::OrbitConfig;
