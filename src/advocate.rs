//! Synthetic advocate records.
//!
//! Names and cities come from the `fake` crate; degree, specialties,
//! experience and phone number are drawn uniformly from the fixed tables
//! and ranges below. Every draw goes through the caller's rng, so a seeded
//! `StdRng` reproduces the same records.

use fake::faker::address::en::CityName;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;
use std::ops::RangeInclusive;

pub static DEGREES: [&str; 7] = ["MD", "PhD", "MSW", "DO", "RN", "NP", "PsyD"];

pub static SPECIALTIES: [&str; 26] = [
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "Suicide History/Attempts",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Men's issues",
    "Relationship Issues (family, friends, couple, etc)",
    "Trauma & PTSD",
    "Personality disorders",
    "Personal growth",
    "Substance use/abuse",
    "Pediatrics",
    "Women's issues (post-partum, infertility, family planning)",
    "Chronic pain",
    "Weight loss & nutrition",
    "Eating disorders",
    "Diabetic Diet and nutrition",
    "Coaching (leadership, career, academic and wellness)",
    "Life coaching",
    "Obsessive-compulsive disorders",
    "Neuropsychological evaluations & testing (ADHD testing)",
    "Attention and Hyperactivity (ADHD)",
    "Sleep issues",
    "Schizophrenia and psychotic disorders",
    "Learning disorders",
    "Domestic abuse",
];

pub const SPECIALTY_COUNT: RangeInclusive<usize> = 1..=5;
pub const YEARS_OF_EXPERIENCE: RangeInclusive<i32> = 1..=30;
pub const PHONE_NUMBERS: RangeInclusive<i64> = 2_000_000_000..=9_999_999_999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: &'static str,
    pub specialties: Vec<&'static str>,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl Advocate {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            first_name: FirstName().fake_with_rng(rng),
            last_name: LastName().fake_with_rng(rng),
            city: CityName().fake_with_rng(rng),
            degree: DEGREES[rng.gen_range(0..DEGREES.len())],
            specialties: pick_specialties(rng),
            years_of_experience: rng.gen_range(YEARS_OF_EXPERIENCE),
            phone_number: rng.gen_range(PHONE_NUMBERS),
        }
    }

    /// JSON array stored in the `payload` column.
    pub fn specialties_json(&self) -> Value {
        Value::from(self.specialties.clone())
    }
}

/// Picks between one and five distinct specialties, in no particular order.
pub fn pick_specialties<R: Rng + ?Sized>(rng: &mut R) -> Vec<&'static str> {
    let count = rng.gen_range(SPECIALTY_COUNT);
    SPECIALTIES[..]
        .choose_multiple(rng, count)
        .copied()
        .collect()
}

/// Yields exactly `remaining` freshly generated advocates.
pub struct AdvocateGenerator<R> {
    rng: R,
    remaining: usize,
}

impl<R: Rng> AdvocateGenerator<R> {
    pub fn new(rng: R, count: usize) -> Self {
        Self {
            rng,
            remaining: count,
        }
    }
}

impl<R: Rng> Iterator for AdvocateGenerator<R> {
    type Item = Advocate;

    fn next(&mut self) -> Option<Advocate> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(Advocate::generate(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for AdvocateGenerator<R> {}
