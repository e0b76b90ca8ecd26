//! The ASCII rendition of the architecture diagram.
//!
//! A single fixed template, kept dependency-free so it can be pasted into
//! a README. The text generator prints it and writes it to disk verbatim;
//! the bytes on stdout and in the file are identical.

/// The complete ASCII architecture diagram.
///
/// The first non-blank line is the title line. Every component that
/// appears as a node in [`crate::architecture::knowledge_base_slackbot`]
/// is spelled out verbatim somewhere in this text; the drift check in the
/// test suite relies on that.
pub const ASCII_DIAGRAM: &str = r#"                   Amazon Bedrock Knowledge Base Slackbot
                           Architecture Diagram
═════════════════════════════════════════════════════════════════════════════

┌──────────────┐
│  Slack User  │
└──────┬───────┘
       │ Slash Command: /ask-aws
       ▼
┌───────────────────────────────────────────────────────────────────────────┐
│                              Slack Workspace                              │
└──────┬────────────────────────────────────────────────────────────────────┘
       │ POST Request
       ▼
┌───────────────────────────────────────────────────────────────────────────┐
│                                API Gateway                                │
│                         Endpoint: /slack/ask-aws                          │
│                               Method: POST                                │
│                   Authentication: Slack Signing Secret                    │
└──────┬────────────────────────────────────────────────────────────────────┘
       │ Invoke Lambda
       ▼
┌───────────────────────────────────────────────────────────────────────────┐
│                           AWS Lambda Functions                            │
├───────────────────────────────────────────────────────────────────────────┤
│                                                                           │
│  ┌─────────────────────────────────────────────────────────────────────┐  │
│  │ BedrockKbSlackbotFunction (Python 3.12)                             │  │
│  │ • Handles Slack slash commands                                      │  │
│  │ • Processes user queries                                            │  │
│  │ • Calls the Bedrock Knowledge Base                                  │  │
│  │ • Returns responses to Slack                                        │  │
│  └─────────────────────────────────────────────────────────────────────┘  │
│                                                                           │
│  ┌─────────────────────────────────────────────────────────────────────┐  │
│  │ CreateIndexFunction (Custom Resource)                               │  │
│  │ • Creates the OpenSearch Serverless index                           │  │
│  │ • Configures vector search settings                                 │  │
│  └─────────────────────────────────────────────────────────────────────┘  │
│                                                                           │
└──────┬────────────────────────────────────────────────────────────────────┘
       │
       ├──────────────────────────────────────────────────┐
       │                                                  │
       ▼                                                  ▼
┌───────────────────────────┐              ┌────────────────────────────────┐
│    Secrets Management     │              │         Amazon Bedrock         │
├───────────────────────────┤              ├────────────────────────────────┤
│                           │              │                                │
│ • Secrets Manager         │              │ • Knowledge Base               │
│   - Slack Bot Token       │              │   - AWS Well-Architected       │
│   - Signing Secret        │              │     Framework Docs             │
│                           │              │                                │
│ • SSM Parameter Store     │              │ • Guardrails                   │
│   - Parameter References  │              │   - Content Filtering          │
│                           │              │   - PII Protection             │
│                           │              │                                │
│                           │              │ • Foundation Models            │
│                           │              │   - Claude 3.5 Sonnet          │
│                           │              │   - Titan Embeddings           │
│                           │              │                                │
└───────────────────────────┘              └──────┬─────────────────────────┘
                                                  │
                                                  │ Query & Embed
                                                  ▼
┌───────────────────────────────────────────────────────────────────────────┐
│                  OpenSearch Serverless (Vector Database)                  │
├───────────────────────────────────────────────────────────────────────────┤
│                                                                           │
│  Vector Collection: slack-bedrock-vector-db                               │
│  Vector Index: slack-bedrock-os-index                                     │
│                                                                           │
│  • Vector search (1024 dimensions)                                        │
│  • HNSW algorithm (Faiss engine)                                          │
│  • Encrypted at rest (AWS managed keys)                                   │
│                                                                           │
└──────┬────────────────────────────────────────────────────────────────────┘
       │
       │ Ingest Documents
       ▼
┌───────────────────────────────────────────────────────────────────────────┐
│                             Amazon S3 Bucket                              │
│                         Knowledge Base Documents                          │
│                           • Encrypted (SSE-S3)                            │
│                           • Versioning enabled                            │
│                          • Public access blocked                          │
└───────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────────────────────────────────────────────────────┐
│                              CloudWatch Logs                              │
│                         • API Gateway access logs                         │
│                          • Lambda function logs                           │
│                             • Error tracking                              │
└───────────────────────────────────────────────────────────────────────────┘

Data Flow:
 1. User sends the /ask-aws command in Slack
 2. Slack sends a POST request to API Gateway
 3. API Gateway invokes the Lambda function
 4. Lambda retrieves secrets from Secrets Manager and SSM Parameter Store
 5. Lambda calls the Bedrock Knowledge Base RetrieveAndGenerate API
 6. Bedrock queries the OpenSearch Serverless vector database
 7. Bedrock applies Guardrails for content filtering
 8. Bedrock generates a response with Claude 3.5 Sonnet
 9. The response is returned to Slack and displayed to the user

Security Features:
 • Secrets stored in AWS Secrets Manager (encrypted)
 • IAM roles with least-privilege access
 • Bedrock Guardrails for content filtering
 • S3 bucket encryption and public access blocking
 • CloudWatch Logs for an audit trail
 • API Gateway request signature verification
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_non_blank_line_is_the_title() {
        let first = ASCII_DIAGRAM
            .lines()
            .find(|line| !line.trim().is_empty())
            .expect("diagram should not be empty");

        assert!(first.contains("Amazon Bedrock Knowledge Base Slackbot"));
    }

    #[test]
    fn test_ends_with_newline() {
        assert!(ASCII_DIAGRAM.ends_with('\n'));
    }

    #[test]
    fn test_sections_present() {
        assert!(ASCII_DIAGRAM.contains("Data Flow:"));
        assert!(ASCII_DIAGRAM.contains("Security Features:"));
        assert!(ASCII_DIAGRAM.contains("RetrieveAndGenerate"));
    }

    #[test]
    fn test_mentions_every_architecture_node() {
        let diagram = crate::architecture::knowledge_base_slackbot();

        for node in diagram.nodes() {
            assert!(
                ASCII_DIAGRAM.contains(node.name()),
                "ASCII diagram does not mention component: {}",
                node.name()
            );
        }
    }

    #[test]
    fn test_mentions_every_cluster_label() {
        let diagram = crate::architecture::knowledge_base_slackbot();

        for cluster in diagram.clusters() {
            assert!(
                ASCII_DIAGRAM.contains(cluster.label()),
                "ASCII diagram does not mention group: {}",
                cluster.label()
            );
        }
    }
}
