// Domain layer: models and ports shared by the extractor, the questionnaire and the adapters.

pub mod model;
pub mod ports;
