use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use gestelec_backend::model::client::{Client, NewClient};
use gestelec_backend::model::electrician::{Electrician, NewElectrician};
use gestelec_backend::model::intervention::{
    Intervention, InterventionWithRelations, NewIntervention,
};
use gestelec_backend::model::invoice::{Invoice, InvoiceWithIntervention, NewInvoice};
use gestelec_backend::repository::client_repo::ClientRepository;
use gestelec_backend::repository::electrician_repo::ElectricianRepository;
use gestelec_backend::repository::intervention_repo::InterventionRepository;
use gestelec_backend::repository::invoice_repo::InvoiceRepository;
use gestelec_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use gestelec_backend::router::client_router::client_router;
use gestelec_backend::router::electrician_router::electrician_router;
use gestelec_backend::router::intervention_router::intervention_router;
use gestelec_backend::router::invoice_router::invoice_router;
use gestelec_backend::service::client_service::ClientServiceImpl;
use gestelec_backend::service::electrician_service::ElectricianServiceImpl;
use gestelec_backend::service::intervention_service::InterventionServiceImpl;
use gestelec_backend::service::invoice_service::InvoiceServiceImpl;

/// In-memory stand-in for the Postgres store, mirroring its contract:
/// assigned ids, rejected dangling references, restricted deletes.
#[derive(Default)]
pub struct MemStore {
    pub clients: Vec<Client>,
    pub electricians: Vec<Electrician>,
    pub interventions: Vec<Intervention>,
    pub invoices: Vec<Invoice>,
    next_id: i32,
}

impl MemStore {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

pub type SharedStore = Arc<Mutex<MemStore>>;

pub struct InMemoryClientRepository {
    store: SharedStore,
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn create(&self, client: NewClient) -> RepositoryResult<Client> {
        let mut store = self.store.lock().unwrap();
        let now = Utc::now();
        let created = Client {
            id: store.next_id(),
            name: client.name,
            address: client.address,
            phone: client.phone,
            email: client.email,
            created_at: now,
            updated_at: now,
        };
        store.clients.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i32) -> RepositoryResult<Client> {
        let store = self.store.lock().unwrap();
        store
            .clients
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("Client not found for ID: {}", id)))
    }

    async fn update(&self, client: Client) -> RepositoryResult<Client> {
        let mut store = self.store.lock().unwrap();
        let existing = store
            .clients
            .iter_mut()
            .find(|c| c.id == client.id)
            .ok_or_else(|| {
                RepositoryError::not_found(format!("No client found to update for ID: {}", client.id))
            })?;
        let mut updated = client;
        updated.updated_at = Utc::now();
        *existing = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut store = self.store.lock().unwrap();
        let dependents = store
            .interventions
            .iter()
            .filter(|i| i.client_id == id)
            .count();
        if dependents > 0 {
            return Err(RepositoryError::reference(format!(
                "Client {} is still referenced by {} intervention(s)",
                id, dependents
            )));
        }
        let before = store.clients.len();
        store.clients.retain(|c| c.id != id);
        if store.clients.len() == before {
            return Err(RepositoryError::not_found(format!(
                "No client found to delete for ID: {}",
                id
            )));
        }
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<Client>> {
        Ok(self.store.lock().unwrap().clients.clone())
    }
}

pub struct InMemoryElectricianRepository {
    store: SharedStore,
}

#[async_trait]
impl ElectricianRepository for InMemoryElectricianRepository {
    async fn create(&self, electrician: NewElectrician) -> RepositoryResult<Electrician> {
        let mut store = self.store.lock().unwrap();
        let now = Utc::now();
        let created = Electrician {
            id: store.next_id(),
            name: electrician.name,
            created_at: now,
            updated_at: now,
        };
        store.electricians.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i32) -> RepositoryResult<Electrician> {
        let store = self.store.lock().unwrap();
        store
            .electricians
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found(format!("Electrician not found for ID: {}", id))
            })
    }

    async fn update(&self, electrician: Electrician) -> RepositoryResult<Electrician> {
        let mut store = self.store.lock().unwrap();
        let existing = store
            .electricians
            .iter_mut()
            .find(|e| e.id == electrician.id)
            .ok_or_else(|| {
                RepositoryError::not_found(format!(
                    "No electrician found to update for ID: {}",
                    electrician.id
                ))
            })?;
        let mut updated = electrician;
        updated.updated_at = Utc::now();
        *existing = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut store = self.store.lock().unwrap();
        let dependents = store
            .interventions
            .iter()
            .filter(|i| i.electrician_id == id)
            .count();
        if dependents > 0 {
            return Err(RepositoryError::reference(format!(
                "Electrician {} is still referenced by {} intervention(s)",
                id, dependents
            )));
        }
        let before = store.electricians.len();
        store.electricians.retain(|e| e.id != id);
        if store.electricians.len() == before {
            return Err(RepositoryError::not_found(format!(
                "No electrician found to delete for ID: {}",
                id
            )));
        }
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<Electrician>> {
        Ok(self.store.lock().unwrap().electricians.clone())
    }
}

pub struct InMemoryInterventionRepository {
    store: SharedStore,
}

impl InMemoryInterventionRepository {
    fn check_references(
        store: &MemStore,
        client_id: i32,
        electrician_id: i32,
    ) -> RepositoryResult<()> {
        if !store.clients.iter().any(|c| c.id == client_id) {
            return Err(RepositoryError::reference(format!(
                "Client {} does not exist",
                client_id
            )));
        }
        if !store.electricians.iter().any(|e| e.id == electrician_id) {
            return Err(RepositoryError::reference(format!(
                "Electrician {} does not exist",
                electrician_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl InterventionRepository for InMemoryInterventionRepository {
    async fn create(&self, intervention: NewIntervention) -> RepositoryResult<Intervention> {
        let mut store = self.store.lock().unwrap();
        Self::check_references(&store, intervention.client_id, intervention.electrician_id)?;
        let created = Intervention {
            id: store.next_id(),
            title: intervention.title,
            description: intervention.description,
            date: intervention.date,
            status: intervention.status,
            client_id: intervention.client_id,
            electrician_id: intervention.electrician_id,
        };
        store.interventions.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i32) -> RepositoryResult<Intervention> {
        let store = self.store.lock().unwrap();
        store
            .interventions
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found(format!("Intervention not found for ID: {}", id))
            })
    }

    async fn update(&self, intervention: Intervention) -> RepositoryResult<Intervention> {
        let mut store = self.store.lock().unwrap();
        Self::check_references(&store, intervention.client_id, intervention.electrician_id)?;
        let existing = store
            .interventions
            .iter_mut()
            .find(|i| i.id == intervention.id)
            .ok_or_else(|| {
                RepositoryError::not_found(format!(
                    "No intervention found to update for ID: {}",
                    intervention.id
                ))
            })?;
        *existing = intervention.clone();
        Ok(intervention)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut store = self.store.lock().unwrap();
        let dependents = store
            .invoices
            .iter()
            .filter(|f| f.intervention_id == id)
            .count();
        if dependents > 0 {
            return Err(RepositoryError::reference(format!(
                "Intervention {} is still referenced by {} invoice(s)",
                id, dependents
            )));
        }
        let before = store.interventions.len();
        store.interventions.retain(|i| i.id != id);
        if store.interventions.len() == before {
            return Err(RepositoryError::not_found(format!(
                "No intervention found to delete for ID: {}",
                id
            )));
        }
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<InterventionWithRelations>> {
        let store = self.store.lock().unwrap();
        let mut result = Vec::new();
        for intervention in &store.interventions {
            let client = store
                .clients
                .iter()
                .find(|c| c.id == intervention.client_id)
                .cloned()
                .expect("intervention references a live client");
            let electrician = store
                .electricians
                .iter()
                .find(|e| e.id == intervention.electrician_id)
                .cloned()
                .expect("intervention references a live electrician");
            result.push(InterventionWithRelations {
                intervention: intervention.clone(),
                client,
                electrician,
            });
        }
        Ok(result)
    }
}

pub struct InMemoryInvoiceRepository {
    store: SharedStore,
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn create(&self, invoice: NewInvoice) -> RepositoryResult<Invoice> {
        let mut store = self.store.lock().unwrap();
        if !store
            .interventions
            .iter()
            .any(|i| i.id == invoice.intervention_id)
        {
            return Err(RepositoryError::reference(format!(
                "Intervention {} does not exist",
                invoice.intervention_id
            )));
        }
        let created = Invoice {
            id: store.next_id(),
            amount: invoice.amount,
            issue_date: invoice.issue_date,
            due_date: invoice.due_date,
            status: invoice.status,
            intervention_id: invoice.intervention_id,
        };
        store.invoices.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i32) -> RepositoryResult<Invoice> {
        let store = self.store.lock().unwrap();
        store
            .invoices
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("Invoice not found for ID: {}", id)))
    }

    async fn update(&self, invoice: Invoice) -> RepositoryResult<Invoice> {
        let mut store = self.store.lock().unwrap();
        if !store
            .interventions
            .iter()
            .any(|i| i.id == invoice.intervention_id)
        {
            return Err(RepositoryError::reference(format!(
                "Intervention {} does not exist",
                invoice.intervention_id
            )));
        }
        let existing = store
            .invoices
            .iter_mut()
            .find(|f| f.id == invoice.id)
            .ok_or_else(|| {
                RepositoryError::not_found(format!(
                    "No invoice found to update for ID: {}",
                    invoice.id
                ))
            })?;
        *existing = invoice.clone();
        Ok(invoice)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut store = self.store.lock().unwrap();
        let before = store.invoices.len();
        store.invoices.retain(|f| f.id != id);
        if store.invoices.len() == before {
            return Err(RepositoryError::not_found(format!(
                "No invoice found to delete for ID: {}",
                id
            )));
        }
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<InvoiceWithIntervention>> {
        let store = self.store.lock().unwrap();
        let mut result = Vec::new();
        for invoice in &store.invoices {
            let intervention = store
                .interventions
                .iter()
                .find(|i| i.id == invoice.intervention_id)
                .cloned()
                .expect("invoice references a live intervention");
            result.push(InvoiceWithIntervention {
                invoice: invoice.clone(),
                intervention,
            });
        }
        Ok(result)
    }
}

/// Full application router backed by the in-memory store.
pub fn setup_app() -> Router {
    let store: SharedStore = Arc::new(Mutex::new(MemStore::default()));
    let client_service = Arc::new(ClientServiceImpl::new(Arc::new(InMemoryClientRepository {
        store: store.clone(),
    })));
    let electrician_service = Arc::new(ElectricianServiceImpl::new(Arc::new(
        InMemoryElectricianRepository {
            store: store.clone(),
        },
    )));
    let intervention_service = Arc::new(InterventionServiceImpl::new(Arc::new(
        InMemoryInterventionRepository {
            store: store.clone(),
        },
    )));
    let invoice_service = Arc::new(InvoiceServiceImpl::new(Arc::new(InMemoryInvoiceRepository {
        store,
    })));
    Router::new()
        .merge(client_router(client_service))
        .merge(electrician_router(electrician_service))
        .merge(intervention_router(intervention_service))
        .merge(invoice_router(invoice_service))
}

/// Sends a JSON request through the router and returns status + parsed body.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Creates a client through the API and returns its id.
pub async fn create_client(app: &Router, name: &str) -> i32 {
    let (status, body) = send_json(
        app,
        "POST",
        "/clients",
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap() as i32
}

/// Creates an electrician through the API and returns its id.
pub async fn create_electrician(app: &Router, name: &str) -> i32 {
    let (status, body) = send_json(
        app,
        "POST",
        "/electricians",
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap() as i32
}

/// Creates an intervention through the API and returns its id.
pub async fn create_intervention(
    app: &Router,
    title: &str,
    client_id: i32,
    electrician_id: i32,
) -> i32 {
    let (status, body) = send_json(
        app,
        "POST",
        "/interventions",
        Some(serde_json::json!({
            "title": title,
            "date": "2025-10-01",
            "clientId": client_id,
            "electricianId": electrician_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap() as i32
}
