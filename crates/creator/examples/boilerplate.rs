//! Boilerplate example - build a small page and write it to disk

use html_creator::{HtmlCreator, Node, Selector};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut creator = HtmlCreator::new(None);
    creator.with_boilerplate(vec![
        Node::element("h1")
            .with_attr("class", "headline")
            .with_content("HTML Creator"),
        Node::element("div").with_attr("id", "main"),
    ]);

    let document = creator.document_mut();
    document.set_title("Example");

    // Descriptors can also come in as JSON
    let items: Vec<Node> = serde_json::from_value(json!([
        { "type": "p", "attributes": { "dataIndex": 1 }, "content": "First" },
        { "type": "p", "attributes": { "dataIndex": 2 }, "content": "Second" }
    ]))?;
    document.add_element_to_target(items, &Selector::id("main"))?;
    document.add_element_to_class("headline", Node::element("small").with_content(" v0.1"))?;

    println!("{}", creator.render_html(None));

    let destination = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "output/index.html".to_string());
    creator.render_to_file(&destination).await?;

    Ok(())
}
