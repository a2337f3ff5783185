use mongodb::{Client, Collection, Database};
use std::error::Error;

/// Collection holding patient login accounts.
pub const PATIENTS_COLLECTION: &str = "patients";
/// Collection holding therapist login accounts.
pub const THERAPISTS_COLLECTION: &str = "therapists";
/// Collection holding one flow-data document per patient.
pub const PATIENT_DATA_COLLECTION: &str = "patient_data";

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .unwrap_or("uroflow");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { client, db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates unique email indexes on every collection. Handlers still check
    /// for an existing document before inserting, but the index closes the
    /// window between the check and the insert.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        for name in [
            PATIENTS_COLLECTION,
            THERAPISTS_COLLECTION,
            PATIENT_DATA_COLLECTION,
        ] {
            let collection = self.db.collection::<mongodb::bson::Document>(name);

            let email_index = IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build();

            match collection.create_index(email_index).await {
                Ok(_) => log::info!("   ✅ Index created: {}(email) unique", name),
                Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
            }
        }

        // Index: patient_data(therapist_assigned) - listing a therapist's patients
        let patient_data = self
            .db
            .collection::<mongodb::bson::Document>(PATIENT_DATA_COLLECTION);

        let therapist_index = IndexModel::builder()
            .keys(doc! { "therapist_assigned": 1 })
            .build();

        match patient_data.create_index(therapist_index).await {
            Ok(_) => log::info!("   ✅ Index created: patient_data(therapist_assigned)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
