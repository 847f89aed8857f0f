pub mod cities;
pub mod estimator;
pub mod model_client;
pub mod prediction_service;
pub mod weather_service;
