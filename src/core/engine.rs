use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct ProfileEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ProfileEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Computing nonagon profile...");

        let input = self.pipeline.extract().await?;
        println!(
            "Parsed input: {} core digits for {}",
            input.counts.total(),
            input.date_text
        );

        let output = self.pipeline.transform(input).await?;
        println!();
        println!("{}", output.summary_output);

        let output_path = self.pipeline.load(output).await?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
