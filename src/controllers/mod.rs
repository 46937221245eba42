pub mod city_controller;
