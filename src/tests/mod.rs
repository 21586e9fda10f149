mod dashboard;
mod login;
