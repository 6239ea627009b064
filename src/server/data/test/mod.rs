mod audit;
mod comment;
mod like;
mod post;
mod tag;
mod user;
