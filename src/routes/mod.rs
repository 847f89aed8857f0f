pub mod prediction_routes;
