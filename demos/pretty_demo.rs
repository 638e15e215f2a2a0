use restcall::{iso8601, pretty_get, show};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    show(&format!("Fetching todo at {}", iso8601()), None::<&()>);

    let todo = pretty_get("https://jsonplaceholder.typicode.com/todos/1")
        .await
        .unwrap();

    show("Parsed response", Some(&todo));
}
