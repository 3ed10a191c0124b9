mod health_check;
mod newsletter;
mod pages;
