use rusqlite::{params, types::Value as SqlValue};

use crate::db::connection::Database;
use crate::errors::ServerError;

// Newest-first cap for the AI search endpoint.
const RESULT_LIMIT: u32 = 30;

/// Subset of filters the AI search endpoint honors. Beds and baths are
/// minimums, the city match is a case-insensitive substring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeFilters {
    pub beds: Option<f64>,
    pub baths: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub city: Option<String>,
}

/// A row from the local listings table, as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    pub id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub neighborhood: Option<String>,
    pub price: Option<i64>,
    pub beds: Option<i64>,
    pub baths: Option<f64>,
    pub sqft: Option<i64>,
    pub main_image_url: Option<String>,
    pub highlight: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: Option<String>,
    pub created_at: String,
}

/// Active listings matching the filters, newest first, capped at 30.
pub fn search_listings(db: &Database, filters: &EdgeFilters) -> Result<Vec<ListingRow>, ServerError> {
    let mut sql = String::from(
        "SELECT id, address, city, state, postal_code, neighborhood, price, beds, baths, \
         sqft, main_image_url, highlight, latitude, longitude, status, created_at \
         FROM listings WHERE is_active = 1",
    );
    let mut args: Vec<SqlValue> = Vec::new();

    if let Some(beds) = filters.beds {
        sql.push_str(" AND beds >= ?");
        args.push(SqlValue::Real(beds));
    }
    if let Some(baths) = filters.baths {
        sql.push_str(" AND baths >= ?");
        args.push(SqlValue::Real(baths));
    }
    if let Some(min_price) = filters.min_price {
        sql.push_str(" AND price >= ?");
        args.push(SqlValue::Real(min_price));
    }
    if let Some(max_price) = filters.max_price {
        sql.push_str(" AND price <= ?");
        args.push(SqlValue::Real(max_price));
    }
    if let Some(city) = filters.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        sql.push_str(" AND LOWER(city) LIKE ?");
        args.push(SqlValue::Text(format!("%{}%", city.to_lowercase())));
    }

    sql.push_str(" ORDER BY created_at DESC LIMIT ?");
    args.push(SqlValue::Integer(RESULT_LIMIT as i64));

    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map(rusqlite::params_from_iter(args.iter()), |row| {
                Ok(ListingRow {
                    id: row.get(0)?,
                    address: row.get(1)?,
                    city: row.get(2)?,
                    state: row.get(3)?,
                    postal_code: row.get(4)?,
                    neighborhood: row.get(5)?,
                    price: row.get(6)?,
                    beds: row.get(7)?,
                    baths: row.get(8)?,
                    sqft: row.get(9)?,
                    main_image_url: row.get(10)?,
                    highlight: row.get(11)?,
                    latitude: row.get(12)?,
                    longitude: row.get(13)?,
                    status: row.get(14)?,
                    created_at: row.get(15)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

/// Upsert one listing row. Used by seed scripts and tests.
pub fn insert_listing(db: &Database, row: &ListingRow, is_active: bool) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO listings (id, address, city, state, postal_code, neighborhood, \
             price, beds, baths, sqft, main_image_url, highlight, latitude, longitude, \
             status, is_active, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17) \
             ON CONFLICT(id) DO UPDATE SET \
             address = excluded.address, city = excluded.city, state = excluded.state, \
             postal_code = excluded.postal_code, neighborhood = excluded.neighborhood, \
             price = excluded.price, beds = excluded.beds, baths = excluded.baths, \
             sqft = excluded.sqft, main_image_url = excluded.main_image_url, \
             highlight = excluded.highlight, latitude = excluded.latitude, \
             longitude = excluded.longitude, status = excluded.status, \
             is_active = excluded.is_active, created_at = excluded.created_at",
            params![
                row.id,
                row.address,
                row.city,
                row.state,
                row.postal_code,
                row.neighborhood,
                row.price,
                row.beds,
                row.baths,
                row.sqft,
                row.main_image_url,
                row.highlight,
                row.latitude,
                row.longitude,
                row.status,
                is_active as i64,
                row.created_at,
            ],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}
