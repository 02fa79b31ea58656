use futures::stream;
use futures::stream::BoxStream;
use futures::stream::StreamExt;

use super::*;
use crate::error::LoopError;

struct EchoClient;

#[async_trait::async_trait]
impl ModelClient for EchoClient {
    async fn stream(&self, request: GenerateRequest) -> Result<BoxStream<'static, ModelStreamEvent>, LoopError> {
        let text = request.system;
        Ok(stream::iter(vec![ModelStreamEvent::TextDelta { delta: text }]).boxed())
    }
}

#[tokio::test]
async fn a_model_client_can_be_driven_through_the_trait_object() {
    let client: Box<dyn ModelClient> = Box::new(EchoClient);
    let request = GenerateRequest {
        system: "hi".to_string(),
        messages: vec![],
        tools: vec![],
    };
    let mut events = client.stream(request).await.expect("stream");
    match events.next().await {
        Some(ModelStreamEvent::TextDelta { delta }) => assert_eq!(delta, "hi"),
        other => panic!("unexpected event: {other:?}"),
    }
}
