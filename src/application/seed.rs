use rust_decimal_macros::dec;
use tracing::info;

use crate::application::engine::OrderEngine;
use crate::domain::money::Money;
use crate::domain::order::{LineRequest, OrderStatus};
use crate::error::Result;

/// Populates an empty deployment with demo SKUs, partners, and a handful of
/// historical orders, strictly through the public engine operations — there
/// is no privileged write path. A convenience for demos and test fixtures,
/// not part of the steady-state contract.
pub async fn seed_demo_data(engine: &OrderEngine) -> Result<()> {
    let skus = [
        ("Walnut Desk Organizer", "office", dec!(24.50), 40),
        ("Anglepoise Lamp", "office", dec!(63.00), 25),
        ("Linen Throw Pillow", "home", dec!(18.75), 60),
        ("Stoneware Mug Set", "kitchen", dec!(32.00), 35),
        ("Cast Iron Skillet", "kitchen", dec!(41.25), 20),
        ("Merino Wool Blanket", "home", dec!(89.00), 15),
        ("Bamboo Cutting Board", "kitchen", dec!(15.40), 50),
        ("Felt Laptop Sleeve", "office", dec!(27.90), 30),
    ];
    let mut sku_ids = Vec::with_capacity(skus.len());
    for (name, category, price, stock) in skus {
        let sku = engine
            .add_sku(name, category, Money::new(price), stock)
            .await?;
        sku_ids.push(sku.id);
    }

    let partners = [
        ("Northwind Logistics", "ops@northwind.example", dec!(5000)),
        ("Crane & Sons Freight", "dispatch@crane.example", dec!(3500)),
        ("Meridian Couriers", "hello@meridian.example", dec!(4200)),
    ];
    for (name, contact, ceiling) in partners {
        engine
            .onboard_partner(name, contact, Money::new(ceiling))
            .await?;
    }

    // Historical orders in assorted lifecycle stages, placed by demo buyers
    // through the normal admission path.
    let buyers = ["buyer-ada", "buyer-grace", "buyer-alan"];
    let mut placed = Vec::new();
    for (i, &sku_id) in sku_ids.iter().enumerate() {
        let buyer = buyers[i % buyers.len()];
        let quantity = (i as u32 % 3) + 1;
        let order = engine
            .place_order(buyer, &[LineRequest { sku_id, quantity }])
            .await?;
        placed.push(order);
    }

    // Fulfill the even-indexed orders, ship the first of those, and cancel
    // the last order (odd-indexed, so still pending).
    for order in placed.iter().step_by(2) {
        engine
            .set_order_status(order.id, OrderStatus::Fulfilled)
            .await?;
    }
    engine
        .set_order_status(placed[0].id, OrderStatus::Shipped)
        .await?;
    if let Some(last) = placed.last().filter(|o| placed.len() % 2 == 0) {
        engine
            .set_order_status(last.id, OrderStatus::Cancelled)
            .await?;
    }

    info!(
        skus = sku_ids.len(),
        partners = partners.len(),
        orders = placed.len(),
        "demo data seeded"
    );
    Ok(())
}
