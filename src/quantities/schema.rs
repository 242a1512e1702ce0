// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Counted-list layout of every CloudFront configuration shape.
//!
//! One declaration per node type. A shape only needs to list the fields that
//! can lead to a counted list; scalar fields are left out.

use crate::crd::{
    AllowedMethods, CacheBehavior, CachePolicyConfig, CookiePreference, CookiesConfig, CorsConfig,
    CustomErrorResponse, CustomHeader, CustomOriginConfig, DistributionConfig, ForwardedValues,
    FunctionAssociation, FunctionConfig, FunctionSpec, GeoRestriction, HeadersConfig,
    KeyValueStoreAssociation, LambdaFunctionAssociation, Origin, OriginCustomHeader, OriginGroup,
    OriginGroupFailoverCriteria, OriginGroupMember, OriginRequestPolicyConfig,
    ParametersInCacheKeyAndForwardedToOrigin, QueryStringsConfig, RemoveHeader,
    ResponseHeadersPolicyConfig, Restrictions, TrustedKeyGroups, TrustedSigners,
    VpcOriginEndpointConfig,
};

counted_schema!(leaf String, i32);

// ----------------------------------------------------------------------------
// Distribution
// ----------------------------------------------------------------------------

counted_schema!(DistributionConfig {
    aliases,
    cache_behaviors,
    custom_error_responses,
    default_cache_behavior,
    origin_groups,
    origins,
    restrictions,
});

counted_schema!(CacheBehavior {
    allowed_methods,
    forwarded_values,
    function_associations,
    lambda_function_associations,
    trusted_key_groups,
    trusted_signers,
});

counted_schema!(counted AllowedMethods { cached_methods });
counted_schema!(ForwardedValues { cookies, headers, query_string_cache_keys });
counted_schema!(CookiePreference { whitelisted_names });
counted_schema!(counted TrustedKeyGroups {});
counted_schema!(counted TrustedSigners {});

counted_schema!(OriginGroup { failover_criteria, members });
counted_schema!(OriginGroupFailoverCriteria { status_codes });

counted_schema!(Origin { custom_headers, custom_origin_config });
counted_schema!(CustomOriginConfig { origin_ssl_protocols });

counted_schema!(Restrictions { geo_restriction });
counted_schema!(counted GeoRestriction {});

counted_schema!(
    leaf FunctionAssociation,
    LambdaFunctionAssociation,
    CustomErrorResponse,
    OriginGroupMember,
    OriginCustomHeader,
);

// ----------------------------------------------------------------------------
// Cache and origin request policies
// ----------------------------------------------------------------------------

counted_schema!(CachePolicyConfig { parameters_in_cache_key_and_forwarded_to_origin });
counted_schema!(ParametersInCacheKeyAndForwardedToOrigin {
    cookies_config,
    headers_config,
    query_strings_config,
});

counted_schema!(OriginRequestPolicyConfig { cookies_config, headers_config, query_strings_config });

counted_schema!(CookiesConfig { cookies });
counted_schema!(HeadersConfig { headers });
counted_schema!(QueryStringsConfig { query_strings });

// ----------------------------------------------------------------------------
// Response headers policy
// ----------------------------------------------------------------------------

counted_schema!(ResponseHeadersPolicyConfig {
    cors_config,
    custom_headers_config,
    remove_headers_config,
});

counted_schema!(CorsConfig {
    access_control_allow_headers,
    access_control_allow_methods,
    access_control_allow_origins,
    access_control_expose_headers,
});

counted_schema!(leaf CustomHeader, RemoveHeader);

// ----------------------------------------------------------------------------
// VPC origin and function
// ----------------------------------------------------------------------------

counted_schema!(VpcOriginEndpointConfig { origin_ssl_protocols });

counted_schema!(FunctionSpec { function_config });
counted_schema!(FunctionConfig { key_value_store_associations });
counted_schema!(leaf KeyValueStoreAssociation);
