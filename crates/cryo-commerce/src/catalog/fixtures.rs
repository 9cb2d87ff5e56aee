//! The storefront's product records.
//!
//! Created once at startup and never changed at runtime.

use crate::catalog::{Product, ProductCategory, Specification};
use crate::ids::ProductId;
use crate::money::Money;
use chrono::{DateTime, NaiveDate, Utc};

/// Spec row shorthand: `(label, value, unit)`; empty unit means none.
type SpecRow = (&'static str, &'static str, &'static str);

struct Fixture {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: ProductCategory,
    price_cents: i64,
    images: &'static [&'static str],
    specs: &'static [SpecRow],
    stock_quantity: u32,
    featured: bool,
    created: (u32, u32, u32, u32, u32),
    updated: (u32, u32, u32, u32, u32),
}

const DEWAR_50L_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=800",
    "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800",
];
const LNG_TANK_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=800",
    "https://images.unsplash.com/photo-1587293852726-70cdb56c2866?w=800",
];
const PUMP_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=800",
    "https://images.unsplash.com/photo-1562408590-e32931084e23?w=800",
];
const VALVE_IMAGES: &[&str] = &["https://images.unsplash.com/photo-1609205807107-171d22478be3?w=800"];
const DEFAULT_IMAGES: &[&str] = &["https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=800"];

const FIXTURES: &[Fixture] = &[
    Fixture {
        id: "1",
        name: "Cryogenic Storage Dewar - 50L",
        description: "High-performance 50-liter cryogenic storage dewar designed for liquid nitrogen, oxygen, and argon storage. Features superior vacuum insulation and durable stainless steel construction.",
        category: ProductCategory::Dewars,
        price_cents: 289_999,
        images: DEWAR_50L_IMAGES,
        specs: &[
            ("Capacity", "50", "L"),
            ("Working Pressure", "22", "PSIG"),
            ("Operating Temperature", "-196 to 50", "°C"),
            ("Material", "Stainless Steel 304", ""),
            ("Vacuum Level", "< 5 × 10⁻⁶", "Torr"),
            ("Static Evaporation Rate", "0.4", "L/day"),
            ("Height", "665", "mm"),
            ("Diameter", "356", "mm"),
            ("Weight Empty", "14", "kg"),
        ],
        stock_quantity: 12,
        featured: true,
        created: (2024, 1, 1, 0, 0),
        updated: (2024, 1, 15, 10, 30),
    },
    Fixture {
        id: "2",
        name: "Industrial LNG Storage Tank - 10,000L",
        description: "Large-capacity liquefied natural gas storage tank with advanced insulation system. Ideal for industrial applications requiring bulk cryogenic fuel storage.",
        category: ProductCategory::StorageTanks,
        price_cents: 12_599_999,
        images: LNG_TANK_IMAGES,
        specs: &[
            ("Capacity", "10,000", "L"),
            ("Design Pressure", "2.5", "MPa"),
            ("Operating Temperature", "-162", "°C"),
            ("Insulation", "Perlite Vacuum", ""),
            ("Material", "Stainless Steel 316L", ""),
            ("Boil-off Rate", "0.1", "%/day"),
            ("Height", "4,200", "mm"),
            ("Diameter", "2,400", "mm"),
            ("Weight Empty", "3,500", "kg"),
        ],
        stock_quantity: 2,
        featured: true,
        created: (2024, 1, 2, 0, 0),
        updated: (2024, 1, 16, 14, 22),
    },
    Fixture {
        id: "3",
        name: "Cryogenic Transfer Pump System",
        description: "High-efficiency centrifugal pump system designed for transferring cryogenic fluids. Features variable speed control and explosion-proof motor.",
        category: ProductCategory::TransferSystems,
        price_cents: 1_849_999,
        images: PUMP_IMAGES,
        specs: &[
            ("Flow Rate", "100", "m³/h"),
            ("Head", "150", "m"),
            ("Suction Pressure", "0.1 to 1.6", "MPa"),
            ("Temperature Range", "-196 to -150", "°C"),
            ("Motor Power", "45", "kW"),
            ("Motor Type", "Explosion-proof", ""),
            ("Material", "Stainless Steel 316", ""),
            ("Connection", "DN100 Flanged", ""),
            ("Weight", "450", "kg"),
        ],
        stock_quantity: 5,
        featured: false,
        created: (2024, 1, 3, 0, 0),
        updated: (2024, 1, 17, 9, 15),
    },
    Fixture {
        id: "4",
        name: "Cryogenic Ball Valve DN50",
        description: "Extended stem ball valve designed for cryogenic applications. Features PTFE seats and graphite packing for reliable sealing at extreme temperatures.",
        category: ProductCategory::ValvesFittings,
        price_cents: 89_999,
        images: VALVE_IMAGES,
        specs: &[
            ("Nominal Diameter", "50", "mm"),
            ("Pressure Rating", "PN40", ""),
            ("Temperature Range", "-196 to 200", "°C"),
            ("Body Material", "Stainless Steel 316", ""),
            ("Ball Material", "Stainless Steel 316", ""),
            ("Seat Material", "PTFE", ""),
            ("Stem Extension", "300", "mm"),
            ("End Connection", "Flanged RF", ""),
            ("Weight", "8.5", "kg"),
        ],
        stock_quantity: 25,
        featured: false,
        created: (2024, 1, 4, 0, 0),
        updated: (2024, 1, 18, 16, 45),
    },
    Fixture {
        id: "5",
        name: "Oxygen Deficiency Monitor",
        description: "Advanced oxygen monitoring system with audible and visual alarms. Essential safety equipment for cryogenic facilities handling liquid nitrogen or other inert gases.",
        category: ProductCategory::SafetyEquipment,
        price_cents: 129_999,
        images: DEFAULT_IMAGES,
        specs: &[
            ("Oxygen Range", "0-25", "%"),
            ("Accuracy", "±0.1", "%"),
            ("Response Time", "< 15", "seconds"),
            ("Sensor Type", "Electrochemical", ""),
            ("Display", "LCD with Backlight", ""),
            ("Alarms", "Audio/Visual/Relay", ""),
            ("Operating Temperature", "-10 to 50", "°C"),
            ("Power Supply", "24VDC", ""),
            ("IP Rating", "IP65", ""),
        ],
        stock_quantity: 15,
        featured: false,
        created: (2024, 1, 5, 0, 0),
        updated: (2024, 1, 19, 11, 20),
    },
    Fixture {
        id: "6",
        name: "Digital Pressure Transmitter - Cryogenic",
        description: "High-precision digital pressure transmitter designed for cryogenic applications. Features temperature compensation and HART communication protocol.",
        category: ProductCategory::Instrumentation,
        price_cents: 219_999,
        images: DEFAULT_IMAGES,
        specs: &[
            ("Pressure Range", "0-4", "MPa"),
            ("Accuracy", "±0.075", "%"),
            ("Operating Temperature", "-196 to 85", "°C"),
            ("Output Signal", "4-20 mA HART", ""),
            ("Process Connection", "1/2\" NPT", ""),
            ("Wetted Materials", "SS316L", ""),
            ("Display", "LCD Digital", ""),
            ("Power Supply", "10-45 VDC", ""),
            ("Protection", "IP67", ""),
        ],
        stock_quantity: 8,
        featured: false,
        created: (2024, 1, 6, 0, 0),
        updated: (2024, 1, 20, 13, 30),
    },
    Fixture {
        id: "7",
        name: "Cryogenic Transfer Hose - 25ft",
        description: "Flexible transfer hose with vacuum insulation for efficient cryogenic fluid transfer. Features quick-disconnect fittings and excellent thermal performance.",
        category: ProductCategory::Accessories,
        price_cents: 189_999,
        images: DEFAULT_IMAGES,
        specs: &[
            ("Length", "25", "ft"),
            ("Inner Diameter", "1", "inch"),
            ("Working Pressure", "350", "PSIG"),
            ("Temperature Range", "-196 to 65", "°C"),
            ("Inner Tube", "Stainless Steel 304", ""),
            ("Insulation", "Multi-layer Vacuum", ""),
            ("Fittings", "Quick Disconnect", ""),
            ("Bend Radius", "12", "inches"),
            ("Weight", "18", "lbs"),
        ],
        stock_quantity: 10,
        featured: false,
        created: (2024, 1, 7, 0, 0),
        updated: (2024, 1, 21, 8, 45),
    },
    Fixture {
        id: "8",
        name: "Laboratory Cryogenic Dewar - 5L",
        description: "Compact 5-liter cryogenic dewar perfect for laboratory applications. Features easy-pour spout and excellent thermal performance for small-scale storage.",
        category: ProductCategory::Dewars,
        price_cents: 79_999,
        images: DEFAULT_IMAGES,
        specs: &[
            ("Capacity", "5", "L"),
            ("Static Evaporation Rate", "0.15", "L/day"),
            ("Working Pressure", "Atmospheric", ""),
            ("Material", "Stainless Steel 304", ""),
            ("Height", "420", "mm"),
            ("Diameter", "230", "mm"),
            ("Weight Empty", "3.2", "kg"),
            ("Neck Opening", "50", "mm"),
            ("Pour Spout", "Included", ""),
        ],
        stock_quantity: 20,
        featured: true,
        created: (2024, 1, 8, 0, 0),
        updated: (2024, 1, 22, 15, 10),
    },
];

fn timestamp((year, month, day, hour, minute): (u32, u32, u32, u32, u32)) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

impl From<&Fixture> for Product {
    fn from(f: &Fixture) -> Self {
        Product {
            id: ProductId::new(f.id),
            name: f.name.to_string(),
            description: f.description.to_string(),
            category: f.category,
            price: Money::usd(f.price_cents),
            images: f.images.iter().map(|s| s.to_string()).collect(),
            specifications: f
                .specs
                .iter()
                .map(|&(label, value, unit)| {
                    let spec = Specification::new(label, value);
                    if unit.is_empty() {
                        spec
                    } else {
                        spec.with_unit(unit)
                    }
                })
                .collect(),
            in_stock: f.stock_quantity > 0,
            stock_quantity: f.stock_quantity,
            featured: f.featured,
            created_at: timestamp(f.created),
            updated_at: timestamp(f.updated),
        }
    }
}

/// Build the product list in catalog order.
pub fn products() -> Vec<Product> {
    FIXTURES.iter().map(Product::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_eight_unique_products() {
        let products = products();
        assert_eq!(products.len(), 8);
        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_three_featured() {
        assert_eq!(products().iter().filter(|p| p.featured).count(), 3);
    }

    #[test]
    fn test_timestamps_parsed() {
        let first = &products()[0];
        assert_eq!(first.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(first.updated_at.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_every_product_has_an_image() {
        assert!(products().iter().all(|p| p.primary_image().is_some()));
    }
}
