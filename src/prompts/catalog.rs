//! Built-in prompt templates

/// A template as shipped with the application
#[derive(Debug, Clone, Copy)]
pub struct TemplateDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub template: &'static str,
    pub category: &'static str,
}

const fn def(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    template: &'static str,
    category: &'static str,
) -> TemplateDef {
    TemplateDef {
        id,
        name,
        description,
        template,
        category,
    }
}

/// Every built-in template, in display order
pub static CATALOG: &[TemplateDef] = &[
    def(
        "code-react",
        "React Component Generator",
        "Generate React components based on requirements",
        "Create a React functional component with TypeScript that {{description}}. Use Tailwind CSS for styling and include proper props typing. The component should be responsive and accessible.",
        "development",
    ),
    def(
        "code-debug",
        "Code Debugger",
        "Debug code issues with structured analysis",
        "Debug the following code and identify potential issues:\n\n```\n{{code}}\n```\n\nProvide a detailed explanation of the problems and suggest fixes.",
        "development",
    ),
    def(
        "code-optimize",
        "Performance Optimizer",
        "Optimize code for better performance",
        "Analyze this code for performance issues and suggest optimizations:\n\n```\n{{code}}\n```\n\nFocus on time complexity, rendering efficiency, and best practices.",
        "development",
    ),
    def(
        "ui-design",
        "UI Component Design",
        "Design UI components with detailed specifications",
        "Design a {{component_type}} UI component that {{functionality}}. Include details on: layout, color scheme, interactions, states (hover, active, disabled), responsiveness, and accessibility considerations.",
        "design",
    ),
    def(
        "ux-flow",
        "UX Flow Designer",
        "Design user experience flows",
        "Create a detailed UX flow for {{user_action}} in a {{application_type}} application. Include user steps, potential pain points, and solutions for a smooth experience.",
        "design",
    ),
    def(
        "api-spec",
        "API Specification",
        "Create detailed API endpoint specifications",
        "Design an API endpoint for {{functionality}}. Include: URL structure, HTTP method, request parameters, request body schema, response schema, status codes, error handling, and authentication requirements.",
        "development",
    ),
    def(
        "tech-stack",
        "Tech Stack Advisor",
        "Get recommendations for technology stack",
        "Recommend a technology stack for building {{application_type}} with requirements: {{requirements}}. Consider scalability, developer experience, community support, and performance.",
        "development",
    ),
    def(
        "schema-design",
        "Database Schema Designer",
        "Design efficient database schemas",
        "Design a database schema for {{application_type}} that needs to store {{data_description}}. Include tables, fields, data types, relationships, and indexing strategies.",
        "development",
    ),
    def(
        "accessibility-audit",
        "Accessibility Audit",
        "Perform accessibility audits on components",
        "Perform an accessibility audit on this component:\n\n```\n{{code}}\n```\n\nCheck for WCAG compliance, keyboard navigation, screen reader compatibility, and suggest improvements.",
        "development",
    ),
    def(
        "state-management",
        "State Management Planner",
        "Plan state management for applications",
        "Design a state management strategy for {{application_type}} with features: {{features}}. Consider data flow, component structure, and performance implications.",
        "development",
    ),
    def(
        "test-cases",
        "Test Case Generator",
        "Generate comprehensive test cases",
        "Generate test cases for this function:\n\n```\n{{code}}\n```\n\nInclude unit tests covering normal cases, edge cases, error conditions, and mocking strategies.",
        "development",
    ),
    def(
        "code-review",
        "Code Reviewer",
        "Perform detailed code reviews",
        "Review this code for quality, maintainability, and best practices:\n\n```\n{{code}}\n```\n\nProvide constructive feedback and specific improvement suggestions.",
        "development",
    ),
    def(
        "security-audit",
        "Security Audit",
        "Audit code for security vulnerabilities",
        "Conduct a security audit on this code:\n\n```\n{{code}}\n```\n\nIdentify potential vulnerabilities like XSS, CSRF, injection attacks, and suggest security improvements.",
        "development",
    ),
    def(
        "feature-spec",
        "Feature Specification",
        "Create detailed feature specifications",
        "Create a detailed specification for implementing {{feature_name}} in a {{application_type}} application. Include user stories, acceptance criteria, technical requirements, and potential challenges.",
        "planning",
    ),
    def(
        "refactoring-plan",
        "Refactoring Planner",
        "Plan code refactoring strategies",
        "Create a step-by-step refactoring plan for this code:\n\n```\n{{code}}\n```\n\nFocus on improving readability, maintainability, and performance without changing functionality.",
        "development",
    ),
    def(
        "animation-design",
        "UI Animation Designer",
        "Design UI animations and transitions",
        "Design animations and transitions for {{interaction_type}} in a {{component_type}} component. Describe timing, easing, keyframes, and how it enhances user experience.",
        "design",
    ),
    def(
        "error-handling",
        "Error Handling Strategy",
        "Develop comprehensive error handling",
        "Design an error handling strategy for {{functionality}} in a {{application_type}} application. Include error types, user feedback, logging, recovery mechanisms, and graceful degradation.",
        "development",
    ),
    def(
        "responsive-design",
        "Responsive Design Strategy",
        "Create responsive design strategies",
        "Develop a responsive design strategy for {{component_type}} that works across mobile, tablet, and desktop. Include breakpoints, layout changes, and content adaptation.",
        "design",
    ),
    def(
        "performance-budget",
        "Performance Budget Planner",
        "Create performance budgets for web applications",
        "Create a performance budget for a {{application_type}} web application. Include load time targets, bundle size limits, rendering metrics, and monitoring strategy.",
        "planning",
    ),
    def(
        "localization-plan",
        "Localization Strategy",
        "Plan application localization",
        "Design a localization strategy for {{application_type}} supporting {{languages}}. Include translation workflow, content structure, cultural considerations, and technical implementation.",
        "planning",
    ),
    def(
        "dom-performance",
        "DOM Performance Optimizer",
        "Optimize DOM operations for high performance",
        "Analyze these DOM operations and suggest performance optimizations:\n\n```\n{{code}}\n```\n\nFocus on reducing reflows/repaints, efficient event handling, and virtual DOM usage.",
        "development",
    ),
    def(
        "rendering-strategy",
        "Rendering Strategy Advisor",
        "Design efficient rendering strategies",
        "Design a rendering strategy for {{component_type}} that handles {{data_volume}} data items. Consider virtualization, lazy loading, and efficient DOM updates.",
        "development",
    ),
    def(
        "web-vitals-optimizer",
        "Core Web Vitals Optimizer",
        "Optimize for Core Web Vitals",
        "Analyze this code for Core Web Vitals impact and suggest improvements:\n\n```\n{{code}}\n```\n\nFocus on LCP, FID/INP, and CLS optimizations.",
        "development",
    ),
    def(
        "event-delegation",
        "Event Delegation Strategy",
        "Design efficient event handling with delegation",
        "Design an event delegation strategy for {{interaction_type}} in a list with {{list_size}} items. Optimize for performance and memory usage.",
        "development",
    ),
    def(
        "content-blog",
        "Technical Blog Post",
        "Generate technical blog content",
        "Write a technical blog post about {{topic}} for developers. Include code examples, best practices, and practical applications. The tone should be informative yet conversational.",
        "content",
    ),
    def(
        "content-docs",
        "Technical Documentation",
        "Create technical documentation",
        "Create technical documentation for {{feature_name}}. Include overview, installation steps, API reference, usage examples, and troubleshooting tips.",
        "content",
    ),
    def(
        "content-tutorial",
        "Step-by-step Tutorial",
        "Create detailed tutorials",
        "Create a step-by-step tutorial for implementing {{feature_name}} in {{framework}}. Include code snippets, explanations, screenshots, and common pitfalls to avoid.",
        "content",
    ),
    def(
        "changelog-generator",
        "Changelog Generator",
        "Generate formatted changelogs",
        "Generate a formatted changelog from these git commits:\n\n{{commit_messages}}\n\nOrganize by feature, bugfix, and breaking changes. Use semantic versioning principles.",
        "content",
    ),
    def(
        "data-visualization",
        "Data Visualization Designer",
        "Design data visualization strategies",
        "Design a data visualization strategy for displaying {{data_type}} data to {{audience_type}}. Recommend chart types, interaction models, and information hierarchy.",
        "data",
    ),
    def(
        "analytics-event",
        "Analytics Event Planner",
        "Plan analytics event tracking",
        "Design an analytics event tracking plan for {{feature_name}}. Include event names, properties, user journeys to track, and insights to derive.",
        "data",
    ),
    def(
        "arch-microservices",
        "Microservices Designer",
        "Design microservice architectures",
        "Design a microservices architecture for {{application_type}} with requirements: {{requirements}}. Include service boundaries, communication patterns, data consistency, and deployment considerations.",
        "architecture",
    ),
    def(
        "arch-serverless",
        "Serverless Architecture",
        "Design serverless architectures",
        "Design a serverless architecture for {{application_type}} with requirements: {{requirements}}. Include function design, data flow, cold start strategies, and cost optimization.",
        "architecture",
    ),
    def(
        "bundle-optimization",
        "Bundle Size Optimizer",
        "Optimize application bundle size",
        "Analyze this webpack/package configuration and suggest bundle size optimizations:\n\n```\n{{config}}\n```\n\nFocus on code splitting, lazy loading, tree shaking, and dependency management.",
        "optimization",
    ),
    def(
        "memory-leak-detective",
        "Memory Leak Detective",
        "Identify potential memory leaks",
        "Analyze this code for potential memory leaks:\n\n```\n{{code}}\n```\n\nIdentify event listeners, closure issues, and suggest fixes.",
        "optimization",
    ),
    def(
        "critical-path-optimizer",
        "Critical Path Optimizer",
        "Optimize critical rendering path",
        "Analyze this HTML/CSS/JS and optimize the critical rendering path:\n\n```\n{{code}}\n```\n\nFocus on resource prioritization, async loading, and render-blocking elimination.",
        "optimization",
    ),
    def(
        "ai-prompt-engineering",
        "AI Prompt Designer",
        "Design effective AI prompts",
        "Design an effective prompt for {{ai_model}} to achieve {{task_description}}. Include context setting, examples, constraints, and evaluation criteria.",
        "ai",
    ),
    def(
        "ai-integration-strategy",
        "AI Integration Strategy",
        "Plan AI integrations for applications",
        "Design a strategy to integrate {{ai_capability}} into a {{application_type}} application. Include user experience, API design, fallback mechanisms, and ethical considerations.",
        "ai",
    ),
    def(
        "sprint-planning",
        "Sprint Planning Guide",
        "Create structured sprint plans",
        "Create a sprint planning document for implementing {{feature_name}}. Break down into stories, tasks, estimate effort, identify dependencies, and define acceptance criteria.",
        "planning",
    ),
    def(
        "tech-debt-assessment",
        "Technical Debt Assessor",
        "Assess and prioritize technical debt",
        "Assess the technical debt in this codebase:\n\n```\n{{code_sample}}\n```\n\nIdentify issues, prioritize by impact, and suggest a remediation plan.",
        "planning",
    ),
    def(
        "monitoring-strategy",
        "Monitoring Strategy Designer",
        "Design application monitoring strategies",
        "Design a monitoring strategy for a {{application_type}} in production. Include metrics to track, alerting thresholds, logging strategy, and incident response workflow.",
        "operations",
    ),
    def(
        "deployment-pipeline",
        "CI/CD Pipeline Designer",
        "Design CI/CD pipelines",
        "Design a CI/CD pipeline for a {{application_type}} with {{requirements}}. Include build steps, test automation, deployment stages, and rollback mechanisms.",
        "operations",
    ),
    def(
        "disaster-recovery",
        "Disaster Recovery Planner",
        "Create disaster recovery plans",
        "Create a disaster recovery plan for a {{application_type}} with {{data_sensitivity}} data. Include backup strategies, recovery time objectives, and step-by-step recovery procedures.",
        "operations",
    ),
    def(
        "cross-platform-strategy",
        "Cross-Platform Strategy",
        "Plan cross-platform development strategies",
        "Design a strategy for developing {{application_type}} across web, iOS, and Android. Compare code sharing approaches, platform-specific considerations, and maintenance trade-offs.",
        "mobile",
    ),
    def(
        "mobile-optimization",
        "Mobile Performance Optimizer",
        "Optimize for mobile performance",
        "Analyze this code for mobile performance issues and suggest optimizations:\n\n```\n{{code}}\n```\n\nFocus on battery usage, network efficiency, and smooth UI interactions.",
        "mobile",
    ),
    def(
        "tech-explainer",
        "Technical Concept Explainer",
        "Explain technical concepts clearly",
        "Explain {{technical_concept}} in simple terms for {{audience_type}}. Use analogies, examples, and visual descriptions without jargon.",
        "communication",
    ),
    def(
        "status-update",
        "Project Status Update",
        "Create clear project status updates",
        "Create a status update for the {{project_name}} project. Include accomplishments, challenges, next steps, and areas requiring attention or decisions.",
        "communication",
    ),
    def(
        "feature-ideation",
        "Feature Brainstormer",
        "Generate innovative feature ideas",
        "Generate 5 innovative feature ideas for {{product_type}} that would solve {{user_problem}}. For each idea, describe the functionality, user benefit, and implementation complexity.",
        "innovation",
    ),
    def(
        "trend-analyzer",
        "Tech Trend Analyzer",
        "Analyze technology trends and applications",
        "Analyze how {{technology_trend}} could impact {{industry_type}} in the next 2-3 years. Include potential applications, challenges, and strategic recommendations.",
        "innovation",
    ),
    def(
        "competitive-analysis",
        "Competitive Feature Analysis",
        "Analyze competitive features",
        "Conduct a competitive analysis of {{feature_name}} across {{competitor_list}}. Compare implementation approaches, user experience, limitations, and unique selling points.",
        "innovation",
    ),
    def(
        "design-system-component",
        "Design System Component",
        "Create design system component specifications",
        "Create a comprehensive specification for a {{component_type}} component in a design system. Include variants, props, accessibility, responsive behavior, and usage guidelines.",
        "design",
    ),
];
