#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: String,
    /// (height, width) of the network input.
    pub input_shape: (u32, u32),
    /// Class names indexed by output position.
    pub labels: Vec<String>,
}
