mod card;
mod card_item;
mod field;
mod group;
mod role;
mod stats;
mod user;
