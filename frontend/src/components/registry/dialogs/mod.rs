pub mod add_service;
