//! Handler for the `/service-analytics` endpoint.
//!
//! The dataset is a fixed placeholder: per-service booking percentages and
//! revenue are not tracked anywhere in the store, and computing them is
//! explicitly out of scope. The shape matches what the analytics chart
//! renders.

use axum::Json;
use serde::Serialize;

/// One slice of the service-mix chart.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceAnalytics {
    pub name: &'static str,
    /// Share of bookings, in percent.
    pub value: u32,
    pub revenue: u32,
    /// Chart segment color (hex).
    pub color: &'static str,
}

/// GET /api/service-analytics
pub async fn service_analytics() -> Json<Vec<ServiceAnalytics>> {
    Json(vec![
        ServiceAnalytics {
            name: "Hair Cut & Style",
            value: 35,
            revenue: 8750,
            color: "#7c3aed",
        },
        ServiceAnalytics {
            name: "Hair Color",
            value: 25,
            revenue: 6250,
            color: "#3b82f6",
        },
        ServiceAnalytics {
            name: "Facial Treatment",
            value: 20,
            revenue: 4000,
            color: "#10b981",
        },
        ServiceAnalytics {
            name: "Manicure & Pedicure",
            value: 12,
            revenue: 2400,
            color: "#f59e0b",
        },
        ServiceAnalytics {
            name: "Massage",
            value: 8,
            revenue: 1600,
            color: "#ef4444",
        },
    ])
}
