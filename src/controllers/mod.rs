pub mod home_controller;
pub mod pickup_controller;
