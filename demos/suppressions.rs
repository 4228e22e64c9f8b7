use std::io;

use mailtrap::{ApiToken, MailtrapClient, SuppressionFilter};

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

    let filter = match std::env::var("MAILTRAP_SUPPRESSED_EMAIL") {
        Ok(email) => SuppressionFilter::by_email(email),
        Err(_) => SuppressionFilter::default(),
    };
    let suppressions = client.account(account_id).suppressions().fetch(&filter).await?;

    for suppression in &suppressions {
        println!(
            "{} {:?} {} (stream: {:?})",
            suppression.id, suppression.suppression_type, suppression.email,
            suppression.sending_stream
        );
    }

    if std::env::var("MAILTRAP_DELETE_FIRST").is_ok() {
        if let Some(first) = suppressions.first() {
            let deleted = client
                .account(account_id)
                .suppression(&first.id)
                .delete()
                .await?;
            println!("deleted suppression {}", deleted.id);
        }
    }

    Ok(())
}
