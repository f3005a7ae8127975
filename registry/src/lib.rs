use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::gateway::stripe::StripePaymentGateway;
use adapter::repository::auth::JwtTokenProvider;
use adapter::repository::banner::BannerRepositoryImpl;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::offering::TestOfferingRepositoryImpl;
use adapter::repository::promotion::PromotionRepositoryImpl;
use adapter::repository::slot::SlotLedgerImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::gateway::payment::PaymentGateway;
use kernel::repository::auth::TokenProvider;
use kernel::repository::banner::BannerRepository;
use kernel::repository::booking::BookingRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::offering::TestOfferingRepository;
use kernel::repository::promotion::PromotionRepository;
use kernel::repository::slot::SlotLedger;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    offering_repository: Arc<dyn TestOfferingRepository>,
    slot_ledger: Arc<dyn SlotLedger>,
    booking_repository: Arc<dyn BookingRepository>,
    banner_repository: Arc<dyn BannerRepository>,
    promotion_repository: Arc<dyn PromotionRepository>,
    token_provider: Arc<dyn TokenProvider>,
    payment_gateway: Arc<dyn PaymentGateway>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let offering_repository = Arc::new(TestOfferingRepositoryImpl::new(pool.clone()));
        let slot_ledger = Arc::new(SlotLedgerImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let banner_repository = Arc::new(BannerRepositoryImpl::new(pool.clone()));
        let promotion_repository = Arc::new(PromotionRepositoryImpl::new(pool.clone()));
        let token_provider = Arc::new(JwtTokenProvider::new(
            &app_config.auth.token_secret,
            app_config.auth.ttl,
        ));
        let payment_gateway = Arc::new(StripePaymentGateway::new(
            app_config.payment.stripe_secret_key.clone(),
        ));
        Self {
            health_check_repository,
            user_repository,
            offering_repository,
            slot_ledger,
            booking_repository,
            banner_repository,
            promotion_repository,
            token_provider,
            payment_gateway,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn offering_repository(&self) -> Arc<dyn TestOfferingRepository> {
        self.offering_repository.clone()
    }

    pub fn slot_ledger(&self) -> Arc<dyn SlotLedger> {
        self.slot_ledger.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn banner_repository(&self) -> Arc<dyn BannerRepository> {
        self.banner_repository.clone()
    }

    pub fn promotion_repository(&self) -> Arc<dyn PromotionRepository> {
        self.promotion_repository.clone()
    }

    pub fn token_provider(&self) -> Arc<dyn TokenProvider> {
        self.token_provider.clone()
    }

    pub fn payment_gateway(&self) -> Arc<dyn PaymentGateway> {
        self.payment_gateway.clone()
    }
}
