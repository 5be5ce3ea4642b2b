//! Display implementations for models

use super::region::RegionMapping;
use super::scenario::AllowedScenarios;
use super::variable::VariableConfig;

impl VariableConfig {
    pub fn pretty_print(&self) {
        println!("VariableConfig {{");
        for (name, spec) in self.iter() {
            if spec.required {
                println!("    {name:?}: {:?} (required),", spec.unit);
            } else {
                println!("    {name:?}: {:?},", spec.unit);
            }
        }
        println!("}}");
    }
}

impl AllowedScenarios {
    pub fn pretty_print(&self) {
        println!("AllowedScenarios [");
        for scenario in self.iter() {
            println!("    {scenario:?},");
        }
        println!("]");
    }
}

impl RegionMapping {
    pub fn pretty_print(&self) {
        println!("RegionMapping {{");
        println!("    model: {:?},", self.model);

        println!("    native_regions: [");
        for region in self.native_regions.keys() {
            println!("        {region:?},");
        }
        println!("    ],");

        println!("    region_aggregation: [");
        for region in self.region_aggregation.keys() {
            println!("        {region:?},");
        }
        println!("    ],");
        println!("}}");
    }
}
