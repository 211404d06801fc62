mod address;
mod entity;
mod user;
