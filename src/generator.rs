//! Synthetic order intake for simulation and testing.
//!
//! Drafts come out syntactically valid and id-less; the store assigns
//! identifiers from its own sequence so the generator never needs to know
//! how many orders already exist.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{LineItem, OrderDraft};

const CUSTOMERS: &[&str] = &[
    "Anjali Singh",
    "Rohit Verma",
    "Sneha Gupta",
    "Karan Malhotra",
];

const MEDICINES: &[&str] = &[
    "Paracetamol 500mg",
    "Ibuprofen 400mg",
    "Cetirizine 10mg",
    "Omeprazole 20mg",
    "Amoxicillin 500mg",
    "Vitamin B Complex",
];

/// Produces one random, well-formed draft placed at the given instant.
pub fn random_draft(rng: &mut impl Rng, placed_at: DateTime<Utc>) -> OrderDraft {
    let customer = CUSTOMERS.choose(rng).copied().unwrap_or(CUSTOMERS[0]);
    let medicine = MEDICINES.choose(rng).copied().unwrap_or(MEDICINES[0]);
    let quantity = rng.gen_range(1..=5);
    let price = f64::from(rng.gen_range(50u32..=250));
    let phone = format!("+91 {}", rng.gen_range(9_000_000_000u64..10_000_000_000u64));

    OrderDraft {
        customer: customer.to_string(),
        phone,
        address: "New Customer Address".to_string(),
        items: vec![LineItem::new(medicine, quantity, price)],
        notes: String::new(),
        placed_at,
    }
}

/// The three sample orders the dashboard opens with, oldest first so that
/// placing them in sequence leaves the freshest at the front.
pub fn seed_drafts(now: DateTime<Utc>) -> Vec<OrderDraft> {
    vec![
        OrderDraft {
            customer: "Amit Kumar".into(),
            phone: "+91 76543 21098".into(),
            address: "789 Sector 15, Gurgaon".into(),
            items: vec![
                LineItem::new("Aspirin 75mg", 30, 15.0),
                LineItem::new("Multivitamin Capsules", 1, 350.0),
            ],
            notes: String::new(),
            placed_at: now - Duration::minutes(45),
        },
        OrderDraft {
            customer: "Priya Patel".into(),
            phone: "+91 87654 32109".into(),
            address: "456 Park Ave, Delhi".into(),
            items: vec![LineItem::new("Crocin Advance", 15, 18.67)],
            notes: "Customer requested quick delivery".into(),
            placed_at: now - Duration::minutes(15),
        },
        OrderDraft {
            customer: "Raj Sharma".into(),
            phone: "+91 98765 43210".into(),
            address: "123 Main St, Mumbai".into(),
            items: vec![
                LineItem::new("Paracetamol 500mg", 10, 25.0),
                LineItem::new("Vitamin C 1000mg", 1, 200.0),
            ],
            notes: String::new(),
            placed_at: now - Duration::minutes(2),
        },
    ]
}
