mod account;
mod change_password;
mod health;
mod helpers;
mod login;
mod logout;
mod refresh;
