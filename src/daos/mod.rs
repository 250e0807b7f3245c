pub mod user_dao;
