use std::io;
use std::time::Duration;

use mailtrap::{
    ApiToken, ContactExportFilter, ContactSubscriptionStatus, CreateContactExportRequest,
    MailtrapClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("MAILTRAP_API_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MAILTRAP_API_TOKEN environment variable is required",
        )
    })?;
    let account_id: i64 = std::env::var("MAILTRAP_ACCOUNT_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "MAILTRAP_ACCOUNT_ID environment variable is required",
            )
        })?
        .parse()?;

    let client = MailtrapClient::new(ApiToken::new(token)?)?;

    let request = CreateContactExportRequest::new([
        ContactExportFilter::list_ids([123]),
        ContactExportFilter::subscription_status(ContactSubscriptionStatus::Subscribed),
    ]);
    let export = client
        .account(account_id)
        .contacts()
        .exports()
        .create(&request)
        .await?;
    println!("created export {} ({:?})", export.id, export.status);

    loop {
        let details = client
            .account(account_id)
            .contacts()
            .export(export.id)
            .get_details()
            .await?;
        println!("export {}: {:?}", details.id, details.status);
        if details.is_download_ready() {
            println!("download: {}", details.url.unwrap());
            break;
        }
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    Ok(())
}
