pub mod score;
pub mod tables;

pub use score::{
    bhakoota_koota, gana_koota, graha_maitri_koota, nadi_koota, score, score_charts, tara_koota,
    varna_koota, vashya_koota, yoni_koota, AshtakootaScore, TOTAL_MAX,
};
pub use tables::{relation, Relation};
