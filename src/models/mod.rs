mod city;

pub use city::{City, CityView, CreateCityRequest, UpdateCityRequest};
