//! Fixed prompts and documents used by the console demos.

pub const GREETING: &str = "Hello, how are you?";

pub const CAPITAL_QUERY: &str = "What is the capital of the United States?";

pub const CAPITAL_DOCS: [&str; 5] = [
    "Carson City is the capital city of the American state of Nevada.",
    "The Commonwealth of the Northern Mariana Islands is a group of islands in the Pacific Ocean. Its capital is Saipan.",
    "Capitalization or capitalisation in English grammar is the use of a capital letter at the start of a word. English usage varies from capitalization in other languages.",
    "Washington, D.C. (also known as simply Washington or D.C., and officially as the District of Columbia) is the capital of the United States. It is a federal district.",
    "Capital punishment has existed in the United States since beforethe United States was a country. As of 2017, capital punishment is legal in 30 of the 50 states.",
];

pub const CLIMATE_QUERY: &str = "Identify the most comprehensive explanation of solutions to climate change that includes both technological and policy approaches. \
The best response should discuss renewable energy transition, carbon capture technologies, international agreements, and address \
the challenges of implementation. Prioritize explanations that balance optimism with realistic assessment of challenges.";

pub const CLIMATE_DOCS: [&str; 7] = [
    "Climate change is primarily caused by the burning of fossil fuels like coal, oil, and natural gas. These fuels release carbon dioxide and other greenhouse gases when burned, trapping heat in the atmosphere and causing global warming.",
    "Renewable energy sources like solar, wind, and hydroelectric power generate electricity without producing greenhouse gas emissions. Transitioning to these clean energy sources is crucial for mitigating climate change.",
    "Electric vehicles (EVs) produce zero tailpipe emissions, but their overall environmental impact depends on how the electricity used to charge them is generated. If powered by renewable energy, EVs can significantly reduce carbon emissions compared to conventional vehicles.",
    "The mining of lithium for EV batteries has significant environmental impacts, including high water usage in water-scarce regions, potential chemical leakage, and habitat disruption. However, these impacts must be weighed against the long-term benefits of reduced emissions.",
    "Deforestation contributes to climate change by reducing carbon sequestration capacity and releasing stored carbon. Forests act as carbon sinks, absorbing CO2 from the atmosphere. When trees are cut down, this carbon is released back into the atmosphere.",
    "Carbon capture and storage (CCS) technologies aim to remove CO2 from point sources like power plants or directly from the atmosphere, then store it underground in geological formations. While promising, these technologies are still being developed at scale.",
    "The Paris Agreement is an international treaty on climate change adopted in 2015. Its goal is to limit global warming to well below 2°C, preferably 1.5°C, compared to pre-industrial levels. Countries submit their own climate action plans called Nationally Determined Contributions (NDCs).",
];
