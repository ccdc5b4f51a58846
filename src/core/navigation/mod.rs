pub mod viewport_controller;
