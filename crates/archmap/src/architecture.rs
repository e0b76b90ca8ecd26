//! The documented architecture, as a fixed diagram.
//!
//! Everything here is a label describing the deployed Slackbot application;
//! none of the referenced services are implemented by this crate.

use crate::{
    identifier::Id,
    model::{Category, Cluster, Diagram, Edge, Node},
};

/// Builds the architecture diagram of the Amazon Bedrock Knowledge Base
/// Slackbot: the Slack entry path, the Lambda functions, secrets handling,
/// the Bedrock services, the OpenSearch Serverless vector store, document
/// storage, and logging.
pub fn knowledge_base_slackbot() -> Diagram {
    let mut diagram = Diagram::new("Amazon Bedrock Knowledge Base Slackbot Architecture");

    // User and Slack
    let user = diagram.add_node(Node::new(Id::new("slack_user"), Category::User, "Slack User"));
    let slack = diagram.add_node(Node::new(
        Id::new("slack_workspace"),
        Category::Chat,
        "Slack Workspace",
    ));

    // API Gateway
    let api = diagram.add_node(
        Node::new(Id::new("api_gateway"), Category::Gateway, "API Gateway")
            .with_detail("/slack/ask-aws"),
    );

    // Lambda functions
    let slackbot_fn = diagram.add_node(
        Node::new(
            Id::new("slackbot_function"),
            Category::Function,
            "BedrockKbSlackbotFunction",
        )
        .with_detail("Python 3.12"),
    );
    let create_index_fn = diagram.add_node(
        Node::new(
            Id::new("create_index_function"),
            Category::Function,
            "CreateIndexFunction",
        )
        .with_detail("Custom Resource"),
    );

    // Secrets management
    let secrets = diagram.add_node(
        Node::new(
            Id::new("secrets_manager"),
            Category::Secrets,
            "Secrets Manager",
        )
        .with_detail("Slack Bot Token\n& Signing Secret"),
    );
    let ssm = diagram.add_node(
        Node::new(
            Id::new("ssm_parameter_store"),
            Category::Secrets,
            "SSM Parameter Store",
        )
        .with_detail("Parameter References"),
    );

    // Bedrock services
    let bedrock_kb = diagram.add_node(
        Node::new(Id::new("bedrock_kb"), Category::Ml, "Knowledge Base")
            .with_detail("AWS Well-Architected\nFramework"),
    );
    let guardrails = diagram.add_node(
        Node::new(Id::new("bedrock_guardrails"), Category::Ml, "Guardrails")
            .with_detail("Content Filtering"),
    );
    let rag_model = diagram.add_node(
        Node::new(Id::new("bedrock_model"), Category::Ml, "Claude 3.5 Sonnet")
            .with_detail("RAG Model"),
    );
    let embeddings = diagram.add_node(
        Node::new(Id::new("bedrock_embeddings"), Category::Ml, "Titan Embeddings")
            .with_detail("Embedding Model"),
    );

    // Vector database
    let vector_db = diagram.add_node(
        Node::new(Id::new("vector_db"), Category::Search, "Vector Collection")
            .with_detail("slack-bedrock-vector-db"),
    );
    let vector_index = diagram.add_node(
        Node::new(Id::new("vector_index"), Category::Search, "Vector Index")
            .with_detail("slack-bedrock-os-index"),
    );

    // Storage
    let s3 = diagram.add_node(
        Node::new(Id::new("s3_bucket"), Category::Storage, "S3 Bucket")
            .with_detail("Knowledge Base\nDocuments"),
    );

    // Monitoring
    let cloudwatch = diagram.add_node(
        Node::new(Id::new("cloudwatch"), Category::Monitoring, "CloudWatch Logs")
            .with_detail("Monitoring & Logging"),
    );

    diagram.add_cluster(Cluster::new("AWS Lambda", vec![slackbot_fn, create_index_fn]));
    diagram.add_cluster(Cluster::new("Secrets Management", vec![secrets, ssm]));
    diagram.add_cluster(Cluster::new(
        "Amazon Bedrock",
        vec![bedrock_kb, guardrails, rag_model, embeddings],
    ));
    diagram.add_cluster(Cluster::new(
        "OpenSearch Serverless",
        vec![vector_db, vector_index],
    ));

    // Connections
    diagram.add_edge(Edge::new(user, slack).with_label("Slash Command\n/ask-aws"));
    diagram.add_edge(Edge::new(slack, api).with_label("POST Request"));
    diagram.add_edge(Edge::new(api, slackbot_fn).with_label("Invoke"));

    diagram.add_edge(Edge::new(slackbot_fn, secrets).with_label("Read Secrets"));
    diagram.add_edge(Edge::new(slackbot_fn, ssm).with_label("Read Parameters"));
    diagram.add_edge(Edge::new(slackbot_fn, bedrock_kb).with_label("Retrieve & Generate"));

    diagram.add_edge(Edge::new(bedrock_kb, vector_db).with_label("Query"));
    diagram.add_edge(Edge::new(bedrock_kb, guardrails).with_label("Apply Guardrails"));
    diagram.add_edge(Edge::new(bedrock_kb, rag_model).with_label("Generate Response"));
    diagram.add_edge(Edge::new(bedrock_kb, embeddings).with_label("Embed Documents"));

    diagram.add_edge(Edge::new(vector_db, vector_index));

    diagram.add_edge(Edge::new(bedrock_kb, s3).with_label("Ingest Documents"));

    diagram.add_edge(Edge::new(create_index_fn, vector_index).with_label("Create Index"));

    diagram.add_edge(Edge::new(slackbot_fn, cloudwatch).with_label("Logs"));
    diagram.add_edge(Edge::new(api, cloudwatch).with_label("Access Logs"));

    diagram.add_edge(Edge::new(slackbot_fn, api).with_label("Response"));
    diagram.add_edge(Edge::new(api, slack).with_label("Response"));
    diagram.add_edge(Edge::new(slack, user).with_label("Display Answer"));

    diagram
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_is_consistent() {
        let diagram = knowledge_base_slackbot();
        diagram.validate().expect("architecture diagram should validate");
    }

    #[test]
    fn test_component_counts() {
        let diagram = knowledge_base_slackbot();

        assert_eq!(diagram.nodes_count(), 15);
        assert_eq!(diagram.clusters().len(), 4);
        assert_eq!(diagram.edges().len(), 18);
    }

    #[test]
    fn test_title() {
        let diagram = knowledge_base_slackbot();
        assert_eq!(
            diagram.title(),
            "Amazon Bedrock Knowledge Base Slackbot Architecture"
        );
    }

    #[test]
    fn test_cluster_labels() {
        let diagram = knowledge_base_slackbot();
        let labels: Vec<&str> = diagram.clusters().iter().map(Cluster::label).collect();

        assert_eq!(
            labels,
            vec![
                "AWS Lambda",
                "Secrets Management",
                "Amazon Bedrock",
                "OpenSearch Serverless",
            ]
        );
    }

    #[test]
    fn test_request_path_edges_present() {
        let diagram = knowledge_base_slackbot();

        let has_edge = |source: &str, target: &str| {
            diagram
                .edges()
                .iter()
                .any(|edge| edge.source() == Id::new(source) && edge.target() == Id::new(target))
        };

        // The request path in, and the response path back out.
        assert!(has_edge("slack_user", "slack_workspace"));
        assert!(has_edge("slack_workspace", "api_gateway"));
        assert!(has_edge("api_gateway", "slackbot_function"));
        assert!(has_edge("slackbot_function", "api_gateway"));
        assert!(has_edge("api_gateway", "slack_workspace"));
        assert!(has_edge("slack_workspace", "slack_user"));
    }

    #[test]
    fn test_only_collection_to_index_edge_is_unlabeled() {
        let diagram = knowledge_base_slackbot();

        let unlabeled: Vec<_> = diagram
            .edges()
            .iter()
            .filter(|edge| edge.label().is_none())
            .collect();

        assert_eq!(unlabeled.len(), 1);
        assert!(unlabeled[0].source() == Id::new("vector_db"));
        assert!(unlabeled[0].target() == Id::new("vector_index"));
    }
}
