//! Shared fixtures for the integration suites.

/// A representative document exercising every section kind: scalars,
/// module chain, handlers, headers, certificates, a two-hostname virtual
/// host, rewrites, environment variables, authentications, accesses,
/// analytics, locations and rewrite maps.
pub const SAMPLE_DOCUMENT: &str = r#"{
  "server": {
    "name": "httpsServer",
    "type": "threaded-server",
    "worker": "thread-worker",
    "socket": "stream-socket",
    "streamContext": "stream-context",
    "serverContext": "server-context",
    "requestContext": "request-context",
    "loggerName": "System",
    "params": {
      "param": [
        { "name": "transport", "value": "tcp" },
        { "name": "address", "value": "0.0.0.0" },
        { "name": "port", "value": "9080" },
        { "name": "software", "value": "server-config/0.1" },
        { "name": "workerNumber", "value": "8" },
        { "name": "workerAcceptMin", "value": "3" },
        { "name": "workerAcceptMax", "value": "8" },
        { "name": "documentRoot", "value": "var/www" },
        { "name": "directoryIndex", "value": "index.html index.htm" },
        { "name": "admin", "value": "admin@example.com" },
        { "name": "keepAliveMax", "value": "64" },
        { "name": "keepAliveTimeout", "value": "5" },
        { "name": "autoIndex", "value": "false" },
        { "name": "errorsPageTemplatePath", "value": "resources/templates/error.html" },
        { "name": "welcomePageTemplatePath", "value": "resources/templates/welcome.html" },
        { "name": "autoIndexTemplatePath", "value": "resources/templates/index.html" }
      ]
    },
    "modules": {
      "module": [
        { "type": "virtual-host" },
        { "type": "authentication" },
        { "type": "environment-variable" },
        { "type": "rewrite" },
        { "type": "access" },
        { "type": "location" },
        { "type": "headers" },
        { "type": "analytics" },
        { "type": "core" }
      ]
    },
    "connectionHandlers": {
      "connectionHandler": [ { "type": "http-1.1" } ]
    },
    "handlers": {
      "handler": [
        { "extension": "default", "name": "file" },
        { "extension": "php", "name": "fastcgi", "params": {
          "param": [
            { "name": "host", "value": "127.0.0.1" },
            { "name": "port", "value": "9000" }
          ]
        } }
      ]
    },
    "headers": {
      "header": [
        { "type": "response", "name": "X-Test", "value": "1", "override": "true" },
        { "type": "response", "name": "Server", "value": "server-config" },
        { "type": "request", "name": "X-Forwarded-Proto", "value": "https", "append": "true" }
      ]
    },
    "certificates": {
      "certificate": [
        { "domain": "example.com", "certPath": "etc/example.pem" },
        { "domain": "*.example.com", "certPath": "etc/wildcard.pem" }
      ]
    },
    "virtualHosts": {
      "virtualHost": [
        {
          "name": "shop.example.com admin.example.com",
          "params": {
            "param": [
              { "name": "documentRoot", "value": "var/www/shop" },
              { "name": "admin", "value": "shop@example.com" }
            ]
          },
          "headers": {
            "header": [ { "type": "response", "name": "X-Shop", "value": "1" } ]
          },
          "rewrites": {
            "rewrite": [ { "condition": "^/old", "target": "/new", "flag": "L" } ]
          },
          "locations": {
            "location": [ {
              "condition": "/checkout/*",
              "handlers": { "handler": [ { "extension": "php", "name": "fastcgi" } ] }
            } ]
          }
        },
        {
          "name": "static.example.com",
          "params": {
            "param": [ { "name": "documentRoot", "value": "var/www/static" } ]
          }
        }
      ]
    },
    "rewrites": {
      "rewrite": [
        { "condition": "^/a", "target": "/one", "flag": "" },
        { "condition": "^/b", "target": "/two", "flag": "" },
        { "condition": "^/c", "target": "/three", "flag": "L" }
      ]
    },
    "environmentVariables": {
      "environmentVariable": [
        { "condition": "", "definition": "APP_ENV=production" }
      ]
    },
    "authentications": {
      "authentication": [
        { "uri": "\\/admin\\/.*", "params": {
          "param": [
            { "name": "type", "value": "basic" },
            { "name": "realm", "value": "Admin Area" },
            { "name": "file", "value": "etc/htpasswd" }
          ]
        } }
      ]
    },
    "accesses": {
      "access": [
        { "type": "allow", "params": {
          "param": [ { "name": "X_REQUEST_URI", "value": "^\\/public\\/.*" } ]
        } },
        { "type": "allow", "params": {
          "param": [ { "name": "X_REQUEST_URI", "value": "^\\/assets\\/.*" } ]
        } }
      ]
    },
    "analytics": {
      "analytic": [
        { "uri": "^\\/track.*", "connectors": {
          "connector": [
            { "name": "ga", "type": "google-analytics", "params": {
              "param": [ { "name": "tid", "value": "UA-12345-1" } ]
            } },
            { "name": "counter", "type": "hit-counter" }
          ]
        } }
      ]
    },
    "locations": {
      "location": [ {
        "condition": "/static/*",
        "handlers": { "handler": [ { "extension": "default", "name": "file" } ] },
        "headers": { "header": [
          { "type": "response", "name": "Cache-Control", "value": "max-age=3600" }
        ] }
      } ]
    },
    "rewriteMaps": {
      "rewriteMap": [
        { "type": "storage", "params": {
          "param": [ { "name": "base", "value": "/srv/storage" } ]
        } }
      ]
    }
  }
}"#;

/// The smallest well-formed document: a bare server element.
pub const MINIMAL_DOCUMENT: &str = r#"{ "server": {} }"#;
