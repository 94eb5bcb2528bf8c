use async_trait::async_trait;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_teachers: u32,
    pub active_students: u32,
    pub total_classes: u32,
    pub revenue: Decimal,
}

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn stats(&self) -> Result<DashboardStats, anyhow::Error>;
}
