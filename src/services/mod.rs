pub mod board_service;
