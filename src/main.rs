use futures::StreamExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use userdesk::config::CONFIG;
use userdesk::{
    EditUserForm, InMemoryAuditLogger, InMemoryStorage, UserDeskError, UserField, UserService,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&CONFIG.log_level))
        .init();

    let storage = if CONFIG.seed_demo_users {
        InMemoryStorage::seeded()
    } else {
        InMemoryStorage::new()
    };
    let mut service = UserService::new(storage, InMemoryAuditLogger::new())
        .with_id_strategy(CONFIG.id_strategy);

    let mut changes = service.subscribe_to_changes();
    let listener = tokio::spawn(async move {
        while let Some(users) = changes.next().await {
            info!("User list changed, {} users", users.len());
        }
    });

    match CONFIG.edit_user_id.as_deref() {
        Some(param) => {
            let mut form = EditUserForm::initialize(&mut service);
            info!("{} users available for editing", form.users().len());

            if form.select_from_route(param) {
                let id = form.selected_id().unwrap_or_default();
                if form.selected_user().is_none() {
                    return Err(UserDeskError::UserNotFound(id).into());
                }
                let name = form.value(UserField::Name).trim().to_string();
                form.set_field(UserField::Name, name);
                form.validate()?;
                let navigation = form.submit()?;
                info!("User {} saved, navigating to {}", id, navigation.route);
            } else {
                warn!("EDIT_USER_ID `{}` does not name a user", param);
            }
        }
        None => info!("EDIT_USER_ID not set, edit form left empty"),
    }

    info!(
        "{} users, {} audit entries",
        service.count_users(),
        service.audit_logger().get_logs().len()
    );

    // Dropping the service closes the change stream
    drop(service);
    listener.await?;

    Ok(())
}
