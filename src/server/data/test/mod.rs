mod article;
mod user;
