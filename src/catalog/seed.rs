//! Records the catalog starts with on every boot.

use crate::catalog::Product;

/// The fixed eight-product seed, in display order.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("1", "Syltherine", "Stylish cafe chair", 2500000.00).with_discount("-30%"),
        Product::new("2", "Leviosa", "Minimalist sofa", 2500000.00),
        Product::new("3", "Lolito", "Luxury couch", 7000000.00).with_discount("-50%"),
        Product::new("4", "Respira", "Outdoor table & stools", 500000.00).marked_new(),
        Product::new("5", "Grifo", "Night lamp", 1500000.00),
        Product::new("6", "Muggo", "Small mug", 100000.00).marked_new(),
        Product::new("7", "Pingky", "Bedroom set", 7000000.00).with_discount("-50%"),
        Product::new("8", "Potty", "Flower pot", 50000.00).marked_new(),
    ]
}
