mod article;
mod category;
mod comment;
mod media;
mod navigation;
mod page;
mod setting;
mod tag;
