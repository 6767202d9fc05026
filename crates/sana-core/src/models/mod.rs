pub mod alert;
pub mod appointment;
pub mod checkin;
pub mod notification;
pub mod person;
pub mod scale;
