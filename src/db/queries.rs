//! Database queries for bookings

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Booking, NewBooking};

/// Insert a booking and return the stored row
pub async fn insert_booking(pool: &PgPool, booking: &NewBooking) -> Result<Booking> {
    let stored = sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (
            id,
            reference,
            customer_name,
            customer_email,
            customer_phone,
            pickup_address,
            delivery_address,
            move_date,
            van_size,
            total,
            breakdown,
            status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING
            id,
            reference,
            customer_name,
            customer_email,
            customer_phone,
            pickup_address,
            delivery_address,
            move_date,
            van_size,
            total,
            breakdown,
            status,
            created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&booking.reference)
    .bind(&booking.customer_name)
    .bind(&booking.customer_email)
    .bind(&booking.customer_phone)
    .bind(&booking.pickup_address)
    .bind(&booking.delivery_address)
    .bind(booking.move_date)
    .bind(&booking.van_size)
    .bind(booking.total)
    .bind(&booking.breakdown)
    .bind(&booking.status)
    .fetch_one(pool)
    .await?;

    Ok(stored)
}

/// Get a booking by reference
pub async fn get_booking(pool: &PgPool, reference: &str) -> Result<Booking> {
    let booking = sqlx::query_as::<_, Booking>(
        r#"
        SELECT
            id,
            reference,
            customer_name,
            customer_email,
            customer_phone,
            pickup_address,
            delivery_address,
            move_date,
            van_size,
            total,
            breakdown,
            status,
            created_at
        FROM bookings
        WHERE reference = $1
        "#,
    )
    .bind(reference)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(booking)
}

/// List recent bookings, most recent first
pub async fn recent_bookings(pool: &PgPool, limit: i64) -> Result<Vec<Booking>> {
    let bookings = sqlx::query_as::<_, Booking>(
        r#"
        SELECT
            id,
            reference,
            customer_name,
            customer_email,
            customer_phone,
            pickup_address,
            delivery_address,
            move_date,
            van_size,
            total,
            breakdown,
            status,
            created_at
        FROM bookings
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}
