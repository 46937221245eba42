mod city_service;

pub use city_service::CityService;
