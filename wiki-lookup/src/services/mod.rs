pub mod wikipedia_service;
