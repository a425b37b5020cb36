//! Built-in [`Memory`] [`Catalog`] contents.

use common::{Money, Rating};

#[cfg(doc)]
use super::Catalog;
use super::Memory;
use crate::domain::{
    listing::{
        Capacity, Description, Feature, Features, Id, Image, Location, Review,
        Title,
    },
    Listing,
};

/// Raw built-in [`Listing`].
struct Seed {
    /// ID of the [`Listing`].
    id: u32,

    /// Title of the [`Listing`].
    title: &'static str,

    /// Location of the [`Listing`].
    location: &'static str,

    /// Description of the [`Listing`].
    description: &'static str,

    /// Nightly price of the [`Listing`].
    price: u64,

    /// Rating of the [`Listing`] in hundredths.
    rating: u32,

    /// Image reference of the [`Listing`].
    image: &'static str,

    /// Features of the [`Listing`].
    features: &'static [Feature],

    /// Guests, bedrooms, beds and bathrooms of the [`Listing`].
    capacity: [u8; 4],

    /// Author, date and comment of every [`Review`].
    reviews: &'static [(&'static str, &'static str, &'static str)],
}

/// Avatar of every built-in [`Review`].
const AVATAR: &str = "assets/imagenes/perfil.png";

/// Built-in [`Listing`]s in their catalog order.
const SEEDS: &[Seed] = {
    use Feature as F;

    &[
        Seed {
            id: 1,
            title: "Salento, Quindío",
            location: "Salento, Colombia",
            description: "A 5km del centro",
            price: 150_000,
            rating: 485,
            image: "assets/imagenes/Hostal1.jpg.webp",
            features: &[F::Wifi, F::Pool, F::Parking],
            capacity: [4, 2, 2, 1],
            reviews: &[],
        },
        Seed {
            id: 2,
            title: "Cartagena, Bolívar",
            location: "Cartagena, Colombia",
            description: "En la ciudad amurallada",
            price: 220_000,
            rating: 492,
            image: "assets/imagenes/hostal2.jpg.avif",
            features: &[F::Wifi, F::Ac, F::Kitchen],
            capacity: [2, 1, 1, 1],
            reviews: &[],
        },
        Seed {
            id: 3,
            title: "Medellín, Antioquia",
            location: "Medellín, Colombia",
            description: "Cerca al Parque Lleras",
            price: 180_000,
            rating: 500,
            image: "assets/imagenes/hostal3.jpg",
            features: &[F::Wifi, F::Pool, F::Ac, F::Parking],
            capacity: [4, 2, 2, 1],
            reviews: &[
                (
                    "Usuario A",
                    "Agosto 2025",
                    "¡Excelente lugar! Muy limpio y la ubicación es perfecta. \
                     Lo recomiendo 100%.",
                ),
                (
                    "Usuario B",
                    "Julio 2025",
                    "El alojamiento es bueno, pero la cocina podría estar \
                     mejor equipada. El anfitrión fue muy amable.",
                ),
            ],
        },
        Seed {
            id: 4,
            title: "Bogotá, Cundinamarca",
            location: "Bogotá, Colombia",
            description: "Vista a la ciudad",
            price: 165_000,
            rating: 478,
            image: "assets/imagenes/hostal4.jpg",
            features: &[F::Wifi, F::Kitchen, F::Parking],
            capacity: [3, 1, 2, 1],
            reviews: &[],
        },
        Seed {
            id: 5,
            title: "Casa con todas las comodidades",
            location: "Guatapé, Colombia",
            description: "Casa completa en la naturaleza",
            price: 300_000,
            rating: 495,
            image: "assets/imagenes/Hostal1.jpg.webp",
            features: &[
                F::Wifi,
                F::Pool,
                F::Ac,
                F::Kitchen,
                F::Parking,
                F::Pets,
            ],
            capacity: [8, 4, 5, 3],
            reviews: &[],
        },
    ]
};

/// Converts the provided [`Seed`] into a [`Listing`].
fn listing(seed: &Seed) -> Option<Listing> {
    let [guests, bedrooms, beds, bathrooms] = seed.capacity;
    Some(Listing {
        id: Id::from(seed.id),
        title: Title::new(seed.title)?,
        location: Location::new(seed.location)?,
        description: Description::new(seed.description)?,
        price: Money::new(seed.price),
        rating: Rating::from_hundredths(seed.rating),
        image: Image::new(seed.image)?,
        features: seed.features.iter().copied().collect::<Features>(),
        capacity: Capacity {
            guests,
            bedrooms,
            beds,
            bathrooms,
        },
        reviews: seed
            .reviews
            .iter()
            .map(|&(author, date, comment)| {
                Some(Review {
                    author: author.to_owned(),
                    date: date.to_owned(),
                    comment: comment.to_owned(),
                    avatar: Image::new(AVATAR)?,
                })
            })
            .collect::<Option<_>>()?,
        available: true,
    })
}

impl Default for Memory {
    /// Creates a [`Memory`] [`Catalog`] of the built-in [`Listing`]s.
    fn default() -> Self {
        SEEDS
            .iter()
            .map(listing)
            .collect::<Option<Vec<_>>>()
            .and_then(|listings| Self::new(listings).ok())
            .expect("built-in listings are valid")
    }
}

#[cfg(test)]
mod spec {
    use super::{Memory, SEEDS};

    #[test]
    fn builds_every_seed() {
        assert_eq!(Memory::default().len(), SEEDS.len());
    }
}
