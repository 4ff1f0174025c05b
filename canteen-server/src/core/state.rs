use std::sync::Arc;
use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::bookings::BookingManager;
use crate::core::Config;
use crate::db::DbService;
use crate::queue::SlotLocks;
use crate::services::CrowdMonitor;

/// Server state - shared handles to every service
///
/// Cloning is shallow (Arc-backed), one instance is shared across all
/// request handlers and background tasks.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Configuration (immutable) |
/// | db | Embedded SurrealDB handle |
/// | slot_locks | Per-slot critical sections for queue mutations |
/// | booking_manager | Booking lifecycle controller |
/// | crowd_monitor | Occupancy snapshot service |
/// | epoch | Instance id, new on every restart |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Per-slot mutex registry
    pub slot_locks: Arc<SlotLocks>,
    /// Booking lifecycle controller
    pub booking_manager: BookingManager,
    /// Occupancy snapshot service
    pub crowd_monitor: CrowdMonitor,
    /// Server instance epoch, used by clients to detect restarts
    pub epoch: String,
}

impl ServerState {
    /// Initialize the server state
    ///
    /// Creates the working directory structure, opens the database and
    /// wires up the services. Background tasks are NOT started here, call
    /// [`start_background_tasks`](Self::start_background_tasks) before
    /// serving.
    ///
    /// # Panics
    ///
    /// Panics when the working directory or database cannot be opened;
    /// the server cannot run without them.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("canteen.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");
        let db = db_service.db;

        Self::with_db(config.clone(), db)
    }

    /// Build state around an existing database handle (used by tests)
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        let slot_locks = Arc::new(SlotLocks::new());
        let booking_manager =
            BookingManager::new(db.clone(), slot_locks.clone(), config.timezone);
        let crowd_monitor = CrowdMonitor::new(
            db.clone(),
            Duration::from_secs(config.snapshot_interval_secs),
        );
        let epoch = uuid::Uuid::new_v4().to_string();

        tracing::info!(epoch = %epoch, "Server state initialized");

        Self {
            config,
            db,
            slot_locks,
            booking_manager,
            crowd_monitor,
            epoch,
        }
    }

    /// Start background tasks
    ///
    /// Must be called before `Server::run()` serves traffic.
    ///
    /// Started tasks:
    /// - Crowd monitor (periodic occupancy snapshots)
    pub fn start_background_tasks(&self) {
        self.crowd_monitor.start();
    }

    /// Stop background tasks, waiting for them to exit
    pub async fn stop_background_tasks(&self) {
        self.crowd_monitor.stop().await;
    }

    /// Get the database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
