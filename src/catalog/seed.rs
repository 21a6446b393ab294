/**
 * Seed Data
 * Sample collections served by the bundled backend
 */
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::models::{BlogPost, MediaAsset, PortfolioEntry};
use crate::error::CatalogError;

/// Collections handed to the store by a backend's initial fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSeed {
    pub works: Vec<PortfolioEntry>,
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub media: Vec<MediaAsset>,
}

impl CatalogSeed {
    /// Parse a seed from a JSON document shaped like `{ works, posts, media }`.
    pub fn from_json(value: Value) -> Result<Self, CatalogError> {
        serde_json::from_value(value)
            .map_err(|e| CatalogError::LoadFailure(format!("invalid seed data: {}", e)))
    }
}

fn sample_data() -> Value {
    serde_json::json!({
        "works": [
            {
                "id": 1,
                "title": "Cortometraje 'Primeros Pasos'",
                "role": "Protagonista",
                "year": 2023,
                "description": "Un emotivo cortometraje sobre la superación personal y los primeros pasos hacia los sueños. Nayla interpreta el papel principal con una sensibilidad extraordinaria.",
                "image": "/images/works/cortometraje-primeros-pasos.jpg",
                "featured": true,
                "category": "cine",
                "videoUrl": null
            },
            {
                "id": 2,
                "title": "Serie 'La Academia'",
                "role": "Figurante recurrente",
                "year": 2022,
                "description": "Participación como estudiante en esta exitosa serie juvenil sobre una escuela de artes escénicas.",
                "image": "/images/works/serie-la-academia.jpg",
                "featured": true,
                "category": "television",
                "videoUrl": null
            },
            {
                "id": 3,
                "title": "Publicidad 'Juguetes Creativos'",
                "role": "Actriz principal",
                "year": 2023,
                "description": "Spot publicitario para una conocida marca de juguetes educativos, mostrando el lado juguetón y creativo de Nayla.",
                "image": "/images/works/publicidad-juguetes.jpg",
                "featured": false,
                "category": "publicidad",
                "videoUrl": "https://example.com/video-juguetes"
            }
        ],
        "posts": [
            {
                "id": 1,
                "title": "Mi primera experiencia en un set de televisión",
                "excerpt": "Comparto cómo fue mi primera vez en un plató profesional y lo que aprendí de esta experiencia increíble.",
                "content": "<p>Hoy quiero compartir con ustedes una de las experiencias más emocionantes de mi vida: mi primera vez en un set de televisión profesional.</p>\n<p>Todo comenzó cuando me seleccionaron para participar como figurante en la serie \"La Academia\". Recuerdo que el día anterior no podía dormir de la emoción.</p>\n<h3>Lo que aprendí:</h3>\n<ul>\n  <li>La importancia de llegar siempre temprano</li>\n  <li>Cómo seguir las indicaciones del director</li>\n  <li>La paciencia necesaria entre toma y toma</li>\n  <li>El trabajo en equipo detrás de cámaras</li>\n</ul>\n<p>Fue una experiencia que confirmó mi amor por la actuación y me dio mucha más confianza para futuros proyectos.</p>",
                "image": "/images/blog/primer-set.jpg",
                "date": "2023-10-15T00:00:00Z",
                "published": true,
                "tags": ["experiencia", "televisión", "aprendizaje"]
            }
        ],
        "media": []
    })
}

/// The sample catalog the site ships with.
pub fn sample_catalog() -> Result<CatalogSeed, CatalogError> {
    CatalogSeed::from_json(sample_data())
}
