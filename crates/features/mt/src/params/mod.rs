mod base;
pub mod wmt14_en_de;
pub mod wmt14_en_fr;
