mod lab_card;

pub use lab_card::lab_card;
