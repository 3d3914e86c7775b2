//! Fixed catalog used by the generator: states, channels, products, seasonality.
//!
//! State and channel weights must each sum to 1.

pub struct StateSpec {
    pub code: &'static str,
    pub region: &'static str,
    pub cities: &'static [&'static str],
    pub weight: f64,
}

pub struct ChannelSpec {
    pub name: &'static str,
    pub weight: f64,
    pub base_discount: f64,
}

pub struct BrandSpec {
    pub name: &'static str,
    pub products: &'static [&'static str],
    pub base_price: f64,
}

pub struct CategorySpec {
    pub name: &'static str,
    pub brands: &'static [BrandSpec],
}

impl CategorySpec {
    /// Mean cost ratio of the category; accessories and smart home run on lower cost
    pub fn base_cost_ratio(&self) -> f64 {
        match self.name {
            "Accessories" | "Smart Home" => 0.50,
            _ => 0.58,
        }
    }
}

pub const STATES: &[StateSpec] = &[
    StateSpec {
        code: "SP",
        region: "Southeast",
        cities: &["São Paulo", "Campinas", "Santos", "São José dos Campos"],
        weight: 0.25,
    },
    StateSpec {
        code: "RJ",
        region: "Southeast",
        cities: &["Rio de Janeiro", "Niterói", "Volta Redonda"],
        weight: 0.14,
    },
    StateSpec {
        code: "MG",
        region: "Southeast",
        cities: &["Belo Horizonte", "Uberlândia", "Juiz de Fora"],
        weight: 0.12,
    },
    StateSpec {
        code: "PR",
        region: "South",
        cities: &["Curitiba", "Londrina", "Maringá"],
        weight: 0.10,
    },
    StateSpec {
        code: "RS",
        region: "South",
        cities: &["Porto Alegre", "Caxias do Sul", "Pelotas"],
        weight: 0.09,
    },
    StateSpec {
        code: "SC",
        region: "South",
        cities: &["Florianópolis", "Joinville", "Blumenau"],
        weight: 0.08,
    },
    StateSpec {
        code: "BA",
        region: "Northeast",
        cities: &["Salvador", "Feira de Santana", "Vitória da Conquista"],
        weight: 0.07,
    },
    StateSpec {
        code: "PE",
        region: "Northeast",
        cities: &["Recife", "Jaboatão", "Olinda"],
        weight: 0.05,
    },
    StateSpec {
        code: "GO",
        region: "Center-West",
        cities: &["Goiânia", "Anápolis", "Aparecida de Goiânia"],
        weight: 0.05,
    },
    StateSpec {
        code: "DF",
        region: "Center-West",
        cities: &["Brasília", "Taguatinga", "Ceilândia"],
        weight: 0.03,
    },
    StateSpec {
        code: "AM",
        region: "North",
        cities: &["Manaus", "Parintins", "Itacoatiara"],
        weight: 0.02,
    },
];

pub const CHANNELS: &[ChannelSpec] = &[
    ChannelSpec {
        name: "E-commerce",
        weight: 0.45,
        base_discount: 0.08,
    },
    ChannelSpec {
        name: "Marketplace",
        weight: 0.22,
        base_discount: 0.11,
    },
    ChannelSpec {
        name: "Physical Store",
        weight: 0.20,
        base_discount: 0.05,
    },
    ChannelSpec {
        name: "B2B Partners",
        weight: 0.13,
        base_discount: 0.03,
    },
];

pub const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "Smartphones",
        brands: &[
            BrandSpec {
                name: "Nova Mobile",
                products: &["Nova One", "Nova Max", "Nova Air"],
                base_price: 2300.0,
            },
            BrandSpec {
                name: "Apex",
                products: &["Apex S10", "Apex S10 Pro", "Apex Neo"],
                base_price: 3100.0,
            },
            BrandSpec {
                name: "Orion",
                products: &["Orion Pulse", "Orion Horizon"],
                base_price: 2800.0,
            },
        ],
    },
    CategorySpec {
        name: "TVs & Audio",
        brands: &[
            BrandSpec {
                name: "Lumina",
                products: &["Lumina Vision 50", "Lumina Vision 65", "Lumina Soundbar"],
                base_price: 2400.0,
            },
            BrandSpec {
                name: "Vertex",
                products: &["Vertex OLED 55", "Vertex OLED 65", "Vertex Beam"],
                base_price: 3600.0,
            },
        ],
    },
    CategorySpec {
        name: "Notebooks",
        brands: &[
            BrandSpec {
                name: "Helix",
                products: &["Helix Pro 14", "Helix Pro 16", "Helix Flex"],
                base_price: 4200.0,
            },
            BrandSpec {
                name: "Nimbus",
                products: &["Nimbus Air", "Nimbus Studio", "Nimbus Go"],
                base_price: 3800.0,
            },
        ],
    },
    CategorySpec {
        name: "Accessories",
        brands: &[
            BrandSpec {
                name: "Pulse",
                products: &["Pulse Buds", "Pulse ANC", "Pulse Fit"],
                base_price: 320.0,
            },
            BrandSpec {
                name: "Volt",
                products: &["Volt Charger", "Volt Power Hub", "Volt Cable Kit"],
                base_price: 180.0,
            },
            BrandSpec {
                name: "Photon",
                products: &["Photon Mouse", "Photon Keyboard"],
                base_price: 250.0,
            },
        ],
    },
    CategorySpec {
        name: "Smart Home",
        brands: &[
            BrandSpec {
                name: "HomeX",
                products: &["HomeX Hub", "HomeX Cam", "HomeX Sensor Pack"],
                base_price: 650.0,
            },
            BrandSpec {
                name: "Nexa",
                products: &["Nexa Lamp", "Nexa Plug", "Nexa Thermo"],
                base_price: 420.0,
            },
        ],
    },
    CategorySpec {
        name: "Gaming & Consoles",
        brands: &[
            BrandSpec {
                name: "Arcade",
                products: &["Arcade One", "Arcade Elite"],
                base_price: 3200.0,
            },
            BrandSpec {
                name: "Blitz",
                products: &["Blitz Pad", "Blitz Headset", "Blitz Chair"],
                base_price: 900.0,
            },
        ],
    },
];

/// Month-of-year demand multiplier, January first. Holiday season peaks in December.
pub const SEASONALITY: [f64; 12] = [
    0.88, 0.90, 1.00, 1.03, 1.07, 1.12, 1.08, 1.10, 1.18, 1.22, 1.30, 1.40,
];

/// Quantity outcomes and their probabilities; single units dominate
pub const QUANTITY_OUTCOMES: [u32; 9] = [1, 1, 1, 1, 2, 2, 3, 4, 5];
pub const QUANTITY_WEIGHTS: [f64; 9] = [0.22, 0.20, 0.18, 0.15, 0.10, 0.08, 0.04, 0.02, 0.01];

pub fn seasonality(month: u32) -> f64 {
    SEASONALITY[(month as usize).saturating_sub(1).min(11)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_weights_sum_to_one() {
        let total: f64 = STATES.iter().map(|s| s.weight).sum();
        assert!((total - 1.0).abs() < 1e-9, "state weights sum to {}", total);
    }

    #[test]
    fn test_channel_weights_sum_to_one() {
        let total: f64 = CHANNELS.iter().map(|c| c.weight).sum();
        assert!((total - 1.0).abs() < 1e-9, "channel weights sum to {}", total);
    }

    #[test]
    fn test_quantity_weights_sum_to_one() {
        let total: f64 = QUANTITY_WEIGHTS.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_states_cover_five_regions() {
        let mut regions: Vec<&str> = STATES.iter().map(|s| s.region).collect();
        regions.sort();
        regions.dedup();
        assert!(STATES.len() >= 10);
        assert_eq!(regions.len(), 5);
        assert!(STATES.iter().all(|s| !s.cities.is_empty()));
    }

    #[test]
    fn test_catalog_is_never_empty_at_any_level() {
        for category in CATEGORIES {
            assert!(!category.brands.is_empty(), "{}", category.name);
            for brand in category.brands {
                assert!(!brand.products.is_empty(), "{}", brand.name);
                assert!(brand.base_price > 0.0);
            }
        }
    }

    #[test]
    fn test_cost_ratio_by_category() {
        let accessories = CATEGORIES.iter().find(|c| c.name == "Accessories").unwrap();
        let notebooks = CATEGORIES.iter().find(|c| c.name == "Notebooks").unwrap();
        assert_eq!(accessories.base_cost_ratio(), 0.50);
        assert_eq!(notebooks.base_cost_ratio(), 0.58);
    }

    #[test]
    fn test_seasonality_lookup() {
        assert_eq!(seasonality(1), 0.88);
        assert_eq!(seasonality(12), 1.40);
    }
}
