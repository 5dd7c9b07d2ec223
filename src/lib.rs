pub mod chatbot;
pub mod config;
pub mod generator;
pub mod i18n;
pub mod notification;
pub mod render;
pub mod site;
pub mod whatsapp;
