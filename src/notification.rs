pub fn send(body: impl Into<String>) {
    let body = body.into();
    if let Err(err) = notify_rust::Notification::new()
        .appname("Lovely Labels")
        .summary("Lovely Labels")
        .body(&body)
        .show()
    {
        tracing::warn!("system notification failed: {err}");
    }
}
