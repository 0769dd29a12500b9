//! Consult the chat terminal

use anyhow::Result;

use crate::chat::AkashaClient;
use crate::content::Language;
use crate::Akasha;

/// Run one consultation and print the reply
pub async fn run(akasha: &Akasha, query: &str, lang: Language) -> Result<()> {
    let client = AkashaClient::new(&akasha.config.akasha)?;
    let reply = client.consult(query, lang).await;
    println!("{}", reply);
    Ok(())
}
